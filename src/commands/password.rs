use crate::passphrase::random::RngSource;
use crate::passphrase::words::{FileWordSource, HttpWordSource, WordSource};
use crate::passphrase::{generate_password, PasswordRequest};
use crate::utils::config::AppConfig;
use crate::utils::error::Result;
use crate::utils::tools::prompt_count;
use clap::{value_parser, Arg, ArgMatches, Command};
use log::{info, warn};
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

pub fn command() -> Command<'static> {
    let count = |name: &'static str, short: char, help: &'static str| {
        Arg::new(name)
            .short(short)
            .long(name)
            .takes_value(true)
            .value_parser(value_parser!(u32))
            .help(help)
    };
    Command::new("password")
        .about("Generate a secure password using the XKCD method")
        .arg(count("words", 'w', "Include WORDS words in the password (default = 4)"))
        .arg(count(
            "caps",
            'c',
            "Capitalize the first letter of CAPS random words (default = 0)",
        ))
        .arg(count(
            "numbers",
            'n',
            "Insert NUMBERS random numbers in the password (default = 0)",
        ))
        .arg(count(
            "symbols",
            's',
            "Insert SYMBOLS random symbols in the password (default = 0)",
        ))
        .arg(
            Arg::new("word-file")
                .long("word-file")
                .takes_value(true)
                .value_parser(value_parser!(PathBuf))
                .help("Read candidate words from a local file, one per line"),
        )
}

/// Counts from the flags, or from interactive prompts when no flag is given.
pub fn read_request<R: BufRead, W: Write>(
    cmd: &ArgMatches,
    input: &mut R,
    output: &mut W,
) -> Result<PasswordRequest> {
    let defaults = PasswordRequest::default();
    let flag = |name: &str| cmd.get_one::<u32>(name).copied();
    let (words, caps, numbers, symbols) = (
        flag("words"),
        flag("caps"),
        flag("numbers"),
        flag("symbols"),
    );

    if words.is_none() && caps.is_none() && numbers.is_none() && symbols.is_none() {
        writeln!(output, "Interactive Mode!\n Just press Enter to use default values.")?;
        return Ok(PasswordRequest {
            word_count: prompt_count(input, output, "How many words?", defaults.word_count)?,
            cap_count: prompt_count(
                input,
                output,
                "How many capitalized words?",
                defaults.cap_count,
            )?,
            number_count: prompt_count(
                input,
                output,
                "How many random numbers?",
                defaults.number_count,
            )?,
            symbol_count: prompt_count(
                input,
                output,
                "How many random symbols?",
                defaults.symbol_count,
            )?,
        });
    }

    Ok(PasswordRequest {
        word_count: words.unwrap_or(defaults.word_count),
        cap_count: caps.unwrap_or(defaults.cap_count),
        number_count: numbers.unwrap_or(defaults.number_count),
        symbol_count: symbols.unwrap_or(defaults.symbol_count),
    })
}

pub fn main(cmd: &ArgMatches, config: &AppConfig) -> Result<()> {
    let requested = read_request(cmd, &mut stdin().lock(), &mut stdout())?;
    let request = requested.clamped(config.password.max_insertions);
    if request != requested {
        warn!(
            "Counts limited to {}: {:?}",
            config.password.max_insertions, request
        );
    }

    let source: Box<dyn WordSource> = match cmd.get_one::<PathBuf>("word-file") {
        Some(path) => Box::new(FileWordSource { path: path.clone() }),
        None => Box::new(HttpWordSource {
            url: config.password.word_api_url.clone(),
        }),
    };
    let words = source.fetch(config.password.fetch_count)?;
    info!("Word pool holds {} words", words.len());

    let password = generate_password(&words, &request, &mut RngSource::os())?;
    println!("Generated Password: {}", password);
    Ok(())
}
