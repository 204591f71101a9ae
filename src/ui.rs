/// Console status output
///
/// Progress lines are prefixed with "standings: " and serialized through a
/// lock, since score-sheets may be downloaded on several threads at once.
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

lazy_static! {
    static ref LOCK: Mutex<()> = Mutex::new(());
}

fn with_console<F>(f: F)
where
    F: FnOnce(),
{
    // A poisoned lock still serializes output
    let _guard = LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f();
}

/// Print colored text to terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stdout() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
            return true;
        }
        false
    }
}

/// Print a progress line
pub fn status(s: &str) {
    with_console(|| {
        println!("standings: {}", s);
    });
}

/// Print a non-fatal notice with a yellow "notice" prefix
pub fn print_notice(msg: &str) {
    with_console(|| {
        print!("standings: ");
        print_color("notice", term::color::YELLOW);
        println!(": {}", msg);
    });
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    with_console(|| {
        println!();
        print_color("error", term::color::BRIGHT_RED);
        println!(": {}", msg);
        println!();
    });
}
