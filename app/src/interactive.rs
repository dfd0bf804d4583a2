use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use gauss_blur::GaussianBlur;
use log::debug;

use crate::blur_file;

/// Prompt loop: sigma, radius and file name, then blur and ask whether to
/// go again. Errors of a single round are printed and do not end the loop.
pub(crate) fn run(output: &Path, configure: impl Fn(&mut GaussianBlur)) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    loop {
        match round(&mut input, &mut out, output, &configure) {
            Ok(()) => writeln!(out, "Saved {}", output.display())?,
            Err(err) => {
                debug!("Round failed: {err:?}");
                writeln!(out, "{err:#}")?;
            }
        }
        let answer = prompt(&mut input, &mut out, "Try again? (y/n): ")?;
        if answer != "y" {
            return Ok(());
        }
    }
}

fn round(
    input: &mut impl BufRead,
    out: &mut impl Write,
    output: &Path,
    configure: &impl Fn(&mut GaussianBlur),
) -> Result<()> {
    let sigma: f64 = prompt_parse(input, out, "Enter sigma: ")?;
    let radius: isize = prompt_parse(input, out, "Enter radius: ")?;
    let file_name = PathBuf::from(prompt(input, out, "Enter image filename: ")?);

    let mut blur = GaussianBlur::new(sigma, radius)?;
    configure(&mut blur);
    blur_file(&blur, &file_name, output)
}

fn prompt_parse<T>(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let line = prompt(input, out, message)?;
    writeln!(out)?;
    line.parse::<T>()
        .with_context(|| format!("Invalid number \"{line}\""))
}

/// Writes `message` and reads one trimmed line; end of input is an error.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<String> {
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("Unexpected end of input"));
    }
    Ok(line.trim().to_string())
}
