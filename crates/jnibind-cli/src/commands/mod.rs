pub mod build;
pub mod check;
pub mod generate;
pub mod project;

#[cfg(test)]
mod project_tests;

use std::error::Error;

/// Print `error: <message>` with the whole source chain and exit with status 1.
pub fn fail(err: &dyn Error) -> ! {
    eprintln!("error: {}", render(err));
    std::process::exit(1);
}

/// Join an error and its sources with `: `.
pub fn render(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
