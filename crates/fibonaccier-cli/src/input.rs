//! Resolution of n from positional arguments or standard input.

use std::io::BufRead;

use fibonaccier_core::calculator::FibError;

/// Resolve n from the positional arguments.
///
/// No argument reads one line from `stdin`, one argument is parsed
/// directly, anything more is a usage error. The result is always > 0.
pub fn resolve_input<S: AsRef<str>>(args: &[S], stdin: &mut impl BufRead) -> Result<u64, FibError> {
    match args {
        [] => parse_n(&read_line(stdin)?),
        [arg] => parse_n(arg.as_ref()),
        _ => Err(FibError::Usage(format!(
            "expected at most one argument, got {}",
            args.len()
        ))),
    }
}

/// Parse a strictly positive integer, ignoring surrounding whitespace.
pub fn parse_n(raw: &str) -> Result<u64, FibError> {
    let trimmed = raw.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|e| FibError::Usage(format!("invalid integer {trimmed:?}: {e}")))?;

    u64::try_from(n)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| FibError::Usage(format!("n must be greater than zero, got {n}")))
}

fn read_line(stdin: &mut impl BufRead) -> Result<String, FibError> {
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Err(FibError::Usage("no input on standard input".into()));
    }
    tracing::debug!(line = line.trim_end(), "read n from standard input");
    Ok(line)
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use super::*;

    const NO_ARGS: [&str; 0] = [];

    fn empty() -> Cursor<&'static [u8]> {
        Cursor::new(&b""[..])
    }

    #[test]
    fn single_argument() {
        assert_eq!(resolve_input(&["3"], &mut empty()).unwrap(), 3);
    }

    #[test]
    fn argument_with_whitespace_and_sign() {
        assert_eq!(resolve_input(&[" 12 "], &mut empty()).unwrap(), 12);
        assert_eq!(resolve_input(&["+4"], &mut empty()).unwrap(), 4);
    }

    #[test]
    fn rejects_non_positive_and_non_numeric() {
        for bad in ["0", "-5", "abc", "", "3.5", "99999999999999999999"] {
            let err = resolve_input(&[bad], &mut empty()).unwrap_err();
            assert!(err.is_usage(), "{bad:?} -> {err}");
        }
    }

    #[test]
    fn reads_stdin_without_arguments() {
        let mut stdin = Cursor::new(&b"7\n"[..]);
        assert_eq!(resolve_input(&NO_ARGS, &mut stdin).unwrap(), 7);
    }

    #[test]
    fn reads_only_the_first_line() {
        let mut stdin = Cursor::new(&b"5\n8\n"[..]);
        assert_eq!(resolve_input(&NO_ARGS, &mut stdin).unwrap(), 5);
    }

    #[test]
    fn stdin_without_trailing_newline() {
        let mut stdin = Cursor::new(&b"9"[..]);
        assert_eq!(resolve_input(&NO_ARGS, &mut stdin).unwrap(), 9);
    }

    #[test]
    fn empty_stdin_is_a_usage_error() {
        let err = resolve_input(&NO_ARGS, &mut empty()).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn invalid_stdin_is_a_usage_error() {
        let mut stdin = Cursor::new(&b"-1\n"[..]);
        assert!(resolve_input(&NO_ARGS, &mut stdin).unwrap_err().is_usage());
    }

    #[test]
    fn too_many_arguments() {
        assert!(resolve_input(&["1", "2"], &mut empty()).unwrap_err().is_usage());
        assert!(resolve_input(&["1", "2", "3"], &mut empty())
            .unwrap_err()
            .is_usage());
    }

    #[test]
    fn stdin_not_consulted_with_an_argument() {
        let mut stdin = Cursor::new(&b"7\n"[..]);
        assert_eq!(resolve_input(&["2"], &mut stdin).unwrap(), 2);
        let mut rest = String::new();
        stdin.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "7\n");
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    #[test]
    fn io_failure_is_not_a_usage_error() {
        let mut stdin = io::BufReader::new(Broken);
        let err = resolve_input(&NO_ARGS, &mut stdin).unwrap_err();
        assert!(matches!(err, FibError::Io(_)));
    }
}
