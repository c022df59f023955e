// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ColorDepth;
use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// # Terminal color depth detection
///
/// Detection inspects environment variables, which is expensive enough that it should
/// not happen on every rendered line. [`detect()`] memoizes the result.
///
/// Three tiers, highest priority first:
/// 1. An explicit override set with [`set_override()`].
/// 2. A cached result of a previous detection.
/// 3. [`examine_env_vars_to_determine_color_depth()`], whose result is then cached.
///
/// ```
/// use r3bl_line_tracker::{global_color_depth, ColorDepth};
///
/// global_color_depth::set_override(ColorDepth::Ansi256);
/// assert_eq!(global_color_depth::detect(), ColorDepth::Ansi256);
/// global_color_depth::clear_override();
/// ```
///
/// # Testing support
///
/// The overrides are process wide. In any test that calls [`set_override()`] use the
/// `#[serial]` attribute from the [serial_test](https://crates.io/crates/serial_test)
/// crate, otherwise tests running in parallel will see each other's overrides.
///
/// [`detect()`]: global_color_depth::detect
/// [`set_override()`]: global_color_depth::set_override
pub mod global_color_depth {
    use super::{AtomicI8, ColorDepth, Ordering, Stream,
                examine_env_vars_to_determine_color_depth};

    static COLOR_DEPTH_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static COLOR_DEPTH_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// Returns the color depth of the terminal attached to stdout.
    #[must_use]
    pub fn detect() -> ColorDepth {
        if let Ok(it) = try_get_override() {
            return it;
        }

        if let Ok(cached) = try_get_cached() {
            return cached;
        }

        let detected = examine_env_vars_to_determine_color_depth(Stream::Stdout);
        set_cached(detected);
        detected
    }

    /// Regardless of the environment, the value you set here is what [`detect()`]
    /// returns until [`clear_override()`] is called.
    pub fn set_override(value: ColorDepth) {
        COLOR_DEPTH_OVERRIDE.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { COLOR_DEPTH_OVERRIDE.store(NOT_SET_VALUE, Ordering::Release); }

    /// Forget the memoized detection result, so the next [`detect()`] examines the
    /// environment again.
    pub fn clear_cache() { COLOR_DEPTH_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if no detection result has been cached yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorDepth, ()> {
        ColorDepth::try_from(COLOR_DEPTH_CACHED.load(Ordering::Acquire))
    }

    fn set_cached(value: ColorDepth) {
        COLOR_DEPTH_CACHED.store(i8::from(value), Ordering::Release);
    }

    /// # Errors
    ///
    /// Returns `Err(())` if no override has been set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorDepth, ()> {
        ColorDepth::try_from(COLOR_DEPTH_OVERRIDE.load(Ordering::Acquire))
    }
}

/// Determine the color depth heuristically from the environment of this process.
///
/// This is expensive (many [`env::var`] lookups) so call it through
/// [`global_color_depth::detect()`] instead. See
/// [`determine_color_depth_from_env()`] for the rules.
#[must_use]
pub fn examine_env_vars_to_determine_color_depth(stream: Stream) -> ColorDepth {
    determine_color_depth_from_env(
        |key| env::var(key).ok(),
        helpers::is_a_tty(stream),
        is_ci::uncached(),
    )
}

/// The rules for mapping environment variables to a [`ColorDepth`], in order:
///
/// 1. `NO_COLOR` (any value except `0`) or `TERM=dumb` → 1 bit.
/// 2. `FORCE_COLOR`: `0` or `false` → 1 bit, empty / `1` / `true` → 4 bits, `2` → 8
///    bits, `3` → 24 bits. Other values are ignored.
/// 3. Output is not a TTY (and `IGNORE_IS_TERMINAL` is not set) → 1 bit.
/// 4. `COLORTERM=truecolor` or `COLORTERM=24bit`, or `TERM_PROGRAM=iTerm.app` → 24 bits.
/// 5. `TERM` ends with `256` or `256color` → 8 bits.
/// 6. Any `COLORTERM`, a known ANSI `TERM`, `CLICOLOR` other than `0`, or running in CI
///    → 4 bits.
/// 7. Otherwise → 1 bit.
///
/// `lookup` returns the value of an environment variable, if it is set.
#[must_use]
pub fn determine_color_depth_from_env(
    lookup: impl Fn(&str) -> Option<String>,
    stream_is_tty: bool,
    in_ci: bool,
) -> ColorDepth {
    if helpers::is_no_color(lookup("NO_COLOR").as_deref())
        || lookup("TERM").is_some_and(|v| v == "dumb")
    {
        return ColorDepth::Monochrome;
    }

    if let Some(depth) = lookup("FORCE_COLOR")
        .as_deref()
        .and_then(helpers::parse_force_color)
    {
        return depth;
    }

    if !(stream_is_tty || lookup("IGNORE_IS_TERMINAL").is_some_and(|v| v != "0")) {
        return ColorDepth::Monochrome;
    }

    if lookup("COLORTERM").is_some_and(|v| v == "truecolor" || v == "24bit")
        || lookup("TERM_PROGRAM").is_some_and(|v| v == "iTerm.app")
    {
        return ColorDepth::Truecolor;
    }

    if lookup("TERM").is_some_and(|term| helpers::check_256_color(&term)) {
        return ColorDepth::Ansi256;
    }

    if lookup("COLORTERM").is_some()
        || lookup("TERM").is_some_and(|term| helpers::check_ansi_color(&term))
        || lookup("CLICOLOR").is_some_and(|v| v != "0")
        || in_ci
    {
        return ColorDepth::Ansi16;
    }

    ColorDepth::Monochrome
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// These trait implementations allow us to store a `ColorDepth` in an [`AtomicI8`].
mod convert_between_color_depth_and_i8 {
    use crate::ColorDepth;

    impl TryFrom<i8> for ColorDepth {
        type Error = ();

        fn try_from(value: i8) -> Result<Self, Self::Error> {
            u8::try_from(value)
                .map_err(|_| ())
                .and_then(<ColorDepth as TryFrom<u8>>::try_from)
        }
    }

    impl From<ColorDepth> for i8 {
        #[allow(clippy::cast_possible_wrap)]
        fn from(value: ColorDepth) -> Self { value.bits() as i8 }
    }
}

mod helpers {
    use super::{ColorDepth, Stream};

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        use std::io::IsTerminal;
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn is_no_color(value: Option<&str>) -> bool {
        match value {
            Some("0") | None => false,
            Some(_) => true,
        }
    }

    #[must_use]
    pub fn parse_force_color(value: &str) -> Option<ColorDepth> {
        match value {
            "0" | "false" => Some(ColorDepth::Monochrome),
            "" | "1" | "true" => Some(ColorDepth::Ansi16),
            "2" => Some(ColorDepth::Ansi256),
            "3" => Some(ColorDepth::Truecolor),
            _ => None,
        }
    }

    #[must_use]
    pub fn check_256_color(term: &str) -> bool {
        term.ends_with("256") || term.ends_with("256color")
    }

    #[must_use]
    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("vscode")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }
}
