//! Block formatting using termimad

use std::io::Write;

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print a text block with rich formatting (or plain fallback)
pub fn print_block(text: &str) {
    if should_use_colors() {
        if let Err(e) = print_rich(text) {
            eprintln!(
                "Warning: Terminal rendering failed ({}), using plain output",
                e
            );
            print_plain(text);
        }
    } else {
        print_plain(text);
    }
}

/// Print with termimad styling
fn print_rich(text: &str) -> std::io::Result<()> {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);

    let mut out = std::io::stdout().lock();
    write!(out, "{}", style_headings(&skin, text))?;
    out.flush()
}

/// Style section headings (unindented lines ending with ':')
///
/// Only headings pass through the markdown skin; every other line is kept
/// verbatim so stored values containing `*`, `_` or backticks survive.
fn style_headings(skin: &MadSkin, text: &str) -> String {
    let mut styled = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches('\n');
        if !content.starts_with(' ') && content.ends_with(':') {
            styled.push_str(&skin.inline(&format!("**{}**", content)).to_string());
            styled.push_str(&line[content.len()..]);
        } else {
            styled.push_str(line);
        }
    }
    styled
}

fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::Cyan};

    // Headings: bold cyan
    skin.bold.set_fg(Cyan);
    skin.bold.add_attr(Attribute::Bold);
}

fn print_plain(text: &str) {
    print!("{}", text);
}
