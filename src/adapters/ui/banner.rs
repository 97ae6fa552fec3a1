//! Welcome banner (CARE-CHAT) with a teal-to-blue gradient, plus quick tips.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Clinical Teal (#14b8a6).
const CLINICAL_TEAL: (u8, u8, u8) = (0x14, 0xb8, 0xa6);
/// Calm Blue (#3b82f6).
const CALM_BLUE: (u8, u8, u8) = (0x3b, 0x82, 0xf6);

const QUICK_TIPS: &[&str] = &[
    "Type 'emergency' for urgent medical help.",
    "Ask about symptoms, medications, or appointments.",
    "Use clear and specific questions.",
    "Commands: /clear resets the chat, /history reprints it, /quit exits.",
];

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// ASCII art for `text` in the standard figlet font; plain text if the font fails to load.
fn render_title(text: &str) -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|figure| figure.to_string()))
        .unwrap_or_else(|| format!("{}\n", text))
}

/// Prints "CARE-CHAT" as ASCII art with a gradient, the tagline and the quick tips.
pub fn print_welcome() {
    let mut out = stdout();
    let art = render_title("CARE-CHAT");
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(CLINICAL_TEAL, CALM_BLUE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: CLINICAL_TEAL.0,
        g: CLINICAL_TEAL.1,
        b: CLINICAL_TEAL.2,
    }));
    let _ = out.execute(Print(format!(
        "🏥 Healthcare Assistant v{}\r\n",
        env!("CARGO_PKG_VERSION")
    )));
    let _ = out.execute(Print(
        "Your personal healthcare companion. Ask me anything about your health concerns.\r\n\r\n",
    ));
    let _ = out.execute(ResetColor);

    let _ = out.execute(Print("Quick Tips\r\n"));
    for tip in QUICK_TIPS {
        let _ = out.execute(Print(format!("  - {}\r\n", tip)));
    }
    let _ = out.execute(Print("\r\n"));
    let _ = out.flush();
}
