/// Generates a `#[test]` wrapper for each listed function. Every wrapper hands
/// its function a fresh [`DbTest`](crate::DbTest).
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        mod sqlite {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::DbTest::new();
                    super::$f(&mut test);
                }
            )*
        }
    };
}
