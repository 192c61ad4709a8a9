//! Building blocks shared by every bounded context: the aggregate-root marker and the
//! repository abstractions the domain crates extend.

/// Declares `pub mod` items and re-exports their contents.
/// ```ignore
/// // code
/// make_re_export!(xxx);
/// // gen
/// pub mod xxx;
/// pub use xxx::*;
/// ```
#[macro_export]
macro_rules! make_re_export {
    ($($(#[$meta:meta])*  $mod_name:ident ),*) => {
        $($(#[$meta])* pub mod $mod_name;)*
        $($(#[$meta])* pub use self::$mod_name::*;)*
    };
}

make_re_export!(model, repository);
