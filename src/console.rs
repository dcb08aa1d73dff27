#[cfg(feature = "console")]
use ::console::Term;


/// An ANSI color code for color terminals.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Color {
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}


/// Pads text to a specific length. Positive padding values pad at the end, negative at the
/// beginning.
pub fn pad(text: &str, pad_to: isize) -> String {
    let len = text.chars().count();
    let target = pad_to.unsigned_abs();
    if target <= len {
        return String::from(text);
    }

    let padding = " ".repeat(target - len);
    if pad_to > 0 {
        format!("{}{}", text, padding)
    } else {
        format!("{}{}", padding, text)
    }
}

#[cfg(feature = "console")]
fn colors_wanted() -> bool {
    // https://no-color.org/
    match std::env::var_os("NO_COLOR") {
        Some(v) => v.is_empty(),
        None => true,
    }
}

/// Outputs text, optionally in a given color, padded to a specific length. Positive padding values
/// pad at the end, negative at the beginning.
pub fn write_in_color<S: AsRef<str>>(text: S, color: Option<Color>, pad_to: isize) {
    let padded = pad(text.as_ref(), pad_to);

    #[cfg(feature = "console")]
    {
        if let Some(clr) = color {
            if colors_wanted() && ::console::colors_enabled() {
                let styled = ::console::style(padded);
                let colored = match clr {
                    Color::DarkGray => styled.bright().black(),
                    Color::Blue => styled.bright().blue(),
                    Color::Green => styled.bright().green(),
                    Color::Cyan => styled.bright().cyan(),
                    Color::Red => styled.bright().red(),
                    Color::Magenta => styled.bright().magenta(),
                    Color::Yellow => styled.bright().yellow(),
                    Color::White => styled.bright().white(),
                };
                print!("{}", colored);
                return;
            }
        }
    }

    #[cfg(not(feature = "console"))]
    {
        let _ = color;
    }

    print!("{}", padded);
}

/// Outputs a whole line in the given color.
pub fn writeln_in_color<S: AsRef<str>>(text: S, color: Option<Color>) {
    write_in_color(text, color, 0);
    println!();
}

/// Returns the width of the terminal attached to standard output, if there is one.
pub fn terminal_width() -> Option<usize> {
    #[cfg(feature = "console")]
    {
        Term::stdout().size_checked()
            .map(|(_rows, cols)| usize::from(cols))
    }

    #[cfg(not(feature = "console"))]
    {
        None
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pad() {
        assert_eq!("abc   ", pad("abc", 6));
        assert_eq!("   abc", pad("abc", -6));
        assert_eq!("abc", pad("abc", 0));
        assert_eq!("abc", pad("abc", 2));
        assert_eq!("abc", pad("abc", -3));
        assert_eq!("Subnet ID:  ", pad("Subnet ID:", 12));
    }
}
