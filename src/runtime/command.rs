/// Given a command and its arguments, returns a line suitable for logging
///
/// Spaces inside the command are escaped with a backslash so a path such as
/// `/Applications/Parity Ethereum.app/...` stays readable as one token. The
/// arguments are joined with single spaces and left untouched; the separator
/// after the command is kept even when there are no arguments. The result is
/// for display only and is never parsed back.
///
/// # Examples
///
/// ```rust
/// use node_locator::runtime::format_command;
///
/// let line = format_command("run cmd", &["--flag", "value"]);
/// assert_eq!(line, r#"Running "run\ cmd --flag value"."#);
/// ```
pub fn format_command<S: AsRef<str>>(command: &str, args: &[S]) -> String {
    let command = command.replace(' ', "\\ ");
    let args = args.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    format!("Running \"{} {}\".", command, args)
}
