// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::max;

/// Extension trait for [`vte::Params`].
pub trait ParamsExt {
    /// The `n`th parameter, where a missing or zero parameter counts as 1. This is how
    /// movement counts work (eg `ESC[A` and `ESC[0A` both move up 1).
    fn extract_nth_non_zero(&self, n: usize) -> u16;

    /// The `n`th parameter as is, or [`None`] if it is missing.
    fn extract_nth_opt(&self, n: usize) -> Option<u16>;
}

impl ParamsExt for vte::Params {
    fn extract_nth_non_zero(&self, n: usize) -> u16 {
        self.extract_nth_opt(n).map_or(
            /* None -> 1 */ 1,
            /* Some(0) -> 1 */ |v| max(v, 1),
        )
    }

    fn extract_nth_opt(&self, n: usize) -> Option<u16> {
        self.iter().nth(n).and_then(|p| p.first()).copied()
    }
}
