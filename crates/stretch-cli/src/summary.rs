use std::path::Path;

use console::Style;
use stretch_core::pipeline::{StretchOutcome, StretchRequest};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_stretch_summary(
    input: &Path,
    output: &Path,
    request: &StretchRequest,
    outcome: &StretchOutcome,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Contrast Stretch"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(request)
    );
    println!();

    println!("  {}", s.header.apply_to("Mapping"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("From"),
        s.value.apply_to(outcome.input)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("To"),
        s.value.apply_to(outcome.output)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Factor"),
        s.value.apply_to(format!("{:.4}", outcome.factor))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Pixels"),
        s.value.apply_to(outcome.pixels)
    );
    println!();
}
