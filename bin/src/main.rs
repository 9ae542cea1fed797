use std::ffi::OsString;
use std::io::stdout;
use std::process::ExitCode;

use adjbacklight::{
    AdjbacklightBuilder, AdjbacklightError, Adjustment, DEFAULT_DEVICE, DEFAULT_STEP_DIVISOR,
    FALLBACK_WIDTH,
};

use clap::{ArgGroup, Parser};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;

/// Interactively adjust the backlight on your portable computer.
///
/// Up/Right brighten, Down/Left darken, `q`, Enter or Ctrl-D quit.
/// The terminal should deliver single bytes (`stty -icanon -echo`).
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(group(
            ArgGroup::new("action")
                .required(false)
                .args(["get", "set"]),
        ))]
struct Args {
    /// Terminal height, accepted for compatibility and ignored
    #[arg(value_name = "HEIGHT")]
    _height: Option<u16>,

    /// Gauge width in columns. Defaults to the terminal width
    width: Option<u16>,

    /// Backlight device name, or its path under /sys/class/backlight
    #[arg(default_value_t = String::from(DEFAULT_DEVICE))]
    device: String,

    /// Number of steps between minimum and maximum brightness
    #[arg(long, value_name = "N", default_value_t = DEFAULT_STEP_DIVISOR,
          value_parser = clap::value_parser!(i64).range(1..))]
    divisor: i64,

    /// Print the brightness as a percentage of the maximum and exit
    #[arg(short, long)]
    get: bool,

    /// Set the brightness and exit: [+|-|=]LEVEL for raw units, LEVEL% for
    /// percentage points of the maximum, LEVEL%% for percent of the current value
    #[arg(short, long, value_name = "LEVEL", allow_hyphen_values = true)]
    set: Option<Adjustment>,
}

/// Rewrite a bare `+LEVEL`, `-LEVEL` or `=LEVEL` argument into `--set=LEVEL`.
///
/// Values of options that take one are left alone, as is everything after `--`.
fn expand_level_shorthand(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut options_done = false;
    let mut value_next = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || options_done || std::mem::take(&mut value_next) {
                return arg;
            }
            match arg.to_str() {
                Some("--") => options_done = true,
                Some("-s" | "--set" | "--divisor") => value_next = true,
                Some(level)
                    if level.starts_with(['+', '-', '='])
                        && level.parse::<Adjustment>().is_ok() =>
                {
                    return OsString::from(format!("--set={level}"));
                }
                _ => {}
            }
            arg
        })
        .collect()
}

/// Hides the cursor while the gauge is on screen.
struct CursorGuard;

impl CursorGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

async fn run(args: Args) -> Result<(), AdjbacklightError> {
    let width = args.width.unwrap_or_else(|| {
        crossterm::terminal::size()
            .map(|(cols, _rows)| cols)
            .unwrap_or(FALLBACK_WIDTH)
    });

    let mut controller = AdjbacklightBuilder::new()
        .with_device(args.device)
        .with_step_divisor(args.divisor)
        .with_width(width)
        .build()
        .await?;
    log::debug!(
        "{} step {}",
        controller.device().device_name,
        controller.session().step()
    );

    if args.get {
        println!("{:.2}%", controller.brightness_percent());
    } else if let Some(adjustment) = args.set {
        controller.set_brightness(adjustment).await?;
    } else {
        let _cursor = CursorGuard::new()?;
        controller
            .run(tokio::io::stdin(), tokio::io::stdout())
            .await?;
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse_from(expand_level_shorthand(std::env::args_os()));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("adjbacklight: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use adjbacklight::Unit;

    fn parse(args: &[&str]) -> Args {
        let args = std::iter::once("adjbacklight")
            .chain(args.iter().copied())
            .map(OsString::from);
        Args::try_parse_from(expand_level_shorthand(args)).unwrap()
    }

    #[test]
    fn bare_level_is_a_set() {
        let args = parse(&["+10%"]);
        assert_eq!(
            args.set,
            Some(Adjustment {
                relative: true,
                amount: 10.0,
                unit: Unit::PercentOfMax
            })
        );

        let args = parse(&["-5%%"]);
        assert_eq!(args.set.map(|set| set.amount), Some(-5.0));

        let args = parse(&["=300"]);
        assert_eq!(args.set.map(|set| set.relative), Some(false));
    }

    #[test]
    fn set_value_is_not_rewritten() {
        let args = parse(&["-s", "-5%"]);
        assert_eq!(args.set.map(|set| set.amount), Some(-5.0));

        let args = parse(&["--set", "+1"]);
        assert_eq!(args.set.map(|set| set.amount), Some(1.0));
    }

    #[test]
    fn positionals_are_untouched() {
        let args = parse(&["24", "80", "acpi_video0"]);
        assert_eq!(args.width, Some(80));
        assert_eq!(args.device, "acpi_video0");
        assert!(args.set.is_none());
        assert!(!args.get);
    }

    #[test]
    fn nothing_is_rewritten_after_double_dash() {
        let args = expand_level_shorthand(["adjbacklight", "--", "+5"].map(OsString::from));
        assert_eq!(args, ["adjbacklight", "--", "+5"]);
    }

    #[test]
    fn flags_are_not_levels() {
        let args = parse(&["-g", "--divisor", "100"]);
        assert!(args.get);
        assert_eq!(args.divisor, 100);
    }
}
