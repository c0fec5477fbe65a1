//! Startup banner with a neon "glitch" typing effect.

use std::io::{self, Write};
use std::time::Duration;

use colored::{Color, Colorize};
use rand::seq::IndexedRandom;

const BANNER_TEXT: &str = r"
 _______   _______   ________   ______    ______   __    __ 
/       \ /       \ /        | /      \  /      \ /  |  /  |
$$$$$$$  |$$$$$$$  |$$$$$$$$/ /$$$$$$  |/$$$$$$  |$$ |  $$ |
$$ |__$$ |$$ |__$$ |$$ |__    $$ |__$$ |$$ |  $$/ $$ |__$$ |
$$    $$< $$    $$< $$    |   $$    $$ |$$ |      $$    $$ |
$$$$$$$  |$$$$$$$  |$$$$$/    $$$$$$$$ |$$ |   __ $$$$$$$$ |
$$ |__$$ |$$ |  $$ |$$ |_____ $$ |  $$ |$$ \__/  |$$ |  $$ |
$$    $$/ $$ |  $$ |$$       |$$ |  $$ |$$    $$/ $$ |  $$ |
$$$$$$$/  $$/   $$/ $$$$$$$$/ $$/   $$/  $$$$$$/  $$/   $$/ 
";

const SIGNATURE: &str = "made by xycaerys  |  powered by LeakCheck.io";

const NEON_COLORS: [Color; 4] = [
    Color::BrightCyan,
    Color::BrightMagenta,
    Color::BrightYellow,
    Color::BrightGreen,
];

/// Delays used while typing the banner out.
#[derive(Debug, Clone, Copy)]
pub struct BannerPacing {
    pub char_delay: Duration,
    pub signature_delay: Duration,
}

impl Default for BannerPacing {
    fn default() -> Self {
        Self {
            char_delay: crate::config::BANNER_CHAR_DELAY,
            signature_delay: crate::config::SIGNATURE_CHAR_DELAY,
        }
    }
}

impl BannerPacing {
    /// No delays, for tests and non-interactive output.
    pub fn instant() -> Self {
        Self {
            char_delay: Duration::ZERO,
            signature_delay: Duration::ZERO,
        }
    }
}

/// Types the banner art and signature to `out`.
///
/// Each visible character of the art gets a random neon color; spaces stay
/// uncolored so the shape stays clean.
pub async fn show_banner<W: Write>(out: &mut W, pacing: BannerPacing) -> io::Result<()> {
    writeln!(out)?;
    for line in BANNER_TEXT.lines() {
        if line.trim().is_empty() {
            writeln!(out)?;
            continue;
        }
        type_glitch_line(out, line, pacing.char_delay).await?;
    }
    writeln!(out)?;

    for ch in SIGNATURE.chars() {
        write!(out, "{}", ch.to_string().bright_cyan())?;
        out.flush()?;
        pause(pacing.signature_delay).await;
    }
    writeln!(out)?;
    writeln!(out)?;
    out.flush()
}

async fn type_glitch_line<W: Write>(out: &mut W, line: &str, delay: Duration) -> io::Result<()> {
    for ch in line.chars() {
        if ch.is_whitespace() {
            write!(out, "{ch}")?;
        } else {
            let color = *NEON_COLORS
                .choose(&mut rand::rng())
                .unwrap_or(&Color::BrightCyan);
            write!(out, "{}", ch.to_string().color(color))?;
        }
        out.flush()?;
        pause(delay).await;
    }
    writeln!(out)
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
