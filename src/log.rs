#[macro_export]
macro_rules! debug {
    ($context:expr, $options:expr, $template:literal, $($value:expr),+) => {
        if $options.debug {
            $crate::log!($context, $template, $($value),+);
        }
    };
}

#[macro_export]
macro_rules! log {
    ($context:expr, $template:literal, $($value:expr),+) => {
        $context
            .console()
            .lock()
            .await
            .write_stderr(
                ("filter-depend: ".to_owned() + &format!($template, $($value),+) + "\n")
                    .as_bytes(),
            )
            .await?;
    };
}
