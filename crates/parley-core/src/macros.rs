///
/// args
///
/// Build `Arguments` with call syntax: positional values first, then
/// `name = value` keywords after a `;`.
///
/// ```ignore
/// args!("@ann", 1);
/// args!(nik_name = "@ann", status = 1);
/// args!("@ann"; status = 1);
/// ```
///

#[macro_export]
macro_rules! args {
    () => {
        $crate::shape::Arguments::new()
    };
    ($($name:ident = $value:expr),+ $(,)?) => {
        $crate::shape::Arguments::new()
            $(.kwarg(stringify!($name), $value))+
    };
    ($($arg:expr),+ ; $($name:ident = $value:expr),* $(,)?) => {
        $crate::shape::Arguments::new()
            $(.arg($arg))+
            $(.kwarg(stringify!($name), $value))*
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::shape::Arguments::new()
            $(.arg($arg))+
    };
}

///
/// TESTS
///
