use std::io::{self, BufRead, Write};

/// Asks for a non-negative count. Empty input or EOF keeps `default`.
pub fn prompt_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: u32,
) -> io::Result<u32> {
    loop {
        write!(output, "{} (default = {}): ", prompt, default)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse::<u32>() {
            Ok(num) => return Ok(num),
            Err(_) => {
                writeln!(output, "Please enter a whole number, 0 or more.")?;
                continue;
            }
        }
    }
}

pub fn wait_for_enter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<()> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_line_takes_default() {
        let mut out = Vec::new();
        let n = prompt_count(&mut Cursor::new("\n"), &mut out, "How many words?", 4).unwrap();
        assert_eq!(n, 4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "How many words? (default = 4): "
        );
    }

    #[test]
    fn eof_takes_default() {
        let mut out = Vec::new();
        let n = prompt_count(&mut Cursor::new(""), &mut out, "How many?", 2).unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn invalid_input_prompts_again() {
        let mut out = Vec::new();
        let n = prompt_count(&mut Cursor::new("-3\nlots\n 7 \n"), &mut out, "Symbols?", 0).unwrap();
        assert_eq!(n, 7);
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Symbols? (default = 0): ").count(), 3);
    }

    #[test]
    fn wait_for_enter_consumes_one_line() {
        let mut input = Cursor::new("\nnext\n");
        let mut out = Vec::new();
        wait_for_enter(&mut input, &mut out, "Press Enter...").unwrap();
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "next\n");
        assert_eq!(String::from_utf8(out).unwrap(), "Press Enter...");
    }
}
