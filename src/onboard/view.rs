use crate::session::Locale;
use crate::ui::style;

pub fn print_welcome_banner() {
    println!("{}", style::arabic("  ٱقْرَأْ"));
    println!("  {}", style::header("Iqra AI"));
    println!("  {}", style::dim(t!("onboard.subtitle")));
    println!();
}

pub fn print_summary(locale: Locale) {
    println!();
    println!(
        "  {} {}: {} ({})",
        style::success("✓"),
        t!("onboard.done"),
        style::value(locale.english_name()),
        locale.native_name()
    );
    println!("  {}", style::dim(t!("onboard.next_steps")));
    println!();
}
