#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const DPLL_ASSERT_LEVEL_DEFINITION: u8 = DPLL_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const DPLL_ASSERT_LEVEL_DEFINITION: u8 = DPLL_ASSERT_MODERATE;

pub const DPLL_ASSERT_SIMPLE: u8 = 1;
pub const DPLL_ASSERT_MODERATE: u8 = 2;

/// Warns through the `log` facade when assertions beyond the simple level are compiled in.
#[macro_export]
macro_rules! print_dpll_assert_warning_message {
    () => {
        if $crate::asserts::DPLL_ASSERT_LEVEL_DEFINITION >= $crate::asserts::DPLL_ASSERT_MODERATE {
            log::warn!("Potential performance degradation: the DPLL assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.", $crate::asserts::DPLL_ASSERT_LEVEL_DEFINITION);
        };
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! dpll_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::DPLL_ASSERT_LEVEL_DEFINITION >= $crate::asserts::DPLL_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! dpll_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::DPLL_ASSERT_LEVEL_DEFINITION >= $crate::asserts::DPLL_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
