// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site macros.
//!
//! Rust has no `function!()` counterpart to `file!()`, so these macros recover the enclosing
//! function's name from the type name of a nested item and pass it to
//! [`Logger::method_entry`](crate::Logger::method_entry) /
//! [`Logger::method_exit`](crate::Logger::method_exit).

/// Strips a nested item's type name down to the enclosing function's name.
///
/// `my_crate::module::load_items::__here` becomes `load_items`; closure frames are skipped.
#[doc(hidden)]
pub fn enclosing_function_name(nested_item: &'static str) -> &'static str {
    let path = nested_item.strip_suffix("::__here").unwrap_or(nested_item);
    path.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path)
}

/// The name of the function this macro is invoked in.
#[doc(hidden)]
#[macro_export]
macro_rules! __enclosing_function {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::hidden::enclosing_function_name(type_name_of(__here))
    }};
}

/**
Logs entry into the enclosing function.

```
# let logger = applog::Logger::new("doc.trace").unwrap();
fn load_items(logger: &applog::Logger) {
    applog::method_entry!(logger);
    // ...
    applog::method_exit!(logger);
}
load_items(&logger);
```

emits `→ Entering load_items [main.rs]` and `← Exiting load_items [main.rs]` at debug level.
*/
#[macro_export]
macro_rules! method_entry {
    ($logger:expr) => {
        $logger.method_entry($crate::__enclosing_function!())
    };
}

/// Logs exit from the enclosing function.  See [`method_entry!`].
#[macro_export]
macro_rules! method_exit {
    ($logger:expr) => {
        $logger.method_exit($crate::__enclosing_function!())
    };
}
