/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Diagnostic switches for the counter forest.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CounterDebugOptions {
    /// List all the debug options.
    pub help: bool,

    /// Log the whole counter tree after a node is created or moved.
    pub dump_counter_tree: bool,

    /// Log every step of the search for a new counter's position.
    pub trace_counter_placement: bool,

    /// Never adopt existing root counters under a newly created reset.
    /// Leaves the forest wrong; only useful when bisecting placement bugs.
    pub disable_root_promotion: bool,
}

impl CounterDebugOptions {
    /// Turn on the options named in a comma-separated list.
    pub fn extend(&mut self, debug_string: String) -> Result<(), String> {
        for option in debug_string.split(',') {
            match option {
                "help" => self.help = true,
                "dump-counter-tree" => self.dump_counter_tree = true,
                "trace-counter-placement" => self.trace_counter_placement = true,
                "disable-root-promotion" => self.disable_root_promotion = true,
                "" => {},
                _ => return Err(String::from(option)),
            };
        }
        Ok(())
    }

    pub fn usage() -> String {
        fn print_option(usage: &mut String, name: &str, description: &str) {
            usage.push_str(&format!("\t{:<35} {}\n", name, description));
        }

        let mut usage = String::from("Counter debug options, comma separated:\n\n");
        print_option(
            &mut usage,
            "dump-counter-tree",
            "Log the counter tree after each node creation or move.",
        );
        print_option(
            &mut usage,
            "trace-counter-placement",
            "Log each step of counter placement.",
        );
        print_option(
            &mut usage,
            "disable-root-promotion",
            "Do not move root counters under a new reset.",
        );
        print_option(&mut usage, "help", "Show this message.");
        usage
    }
}
