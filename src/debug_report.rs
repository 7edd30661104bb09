use kstem::{Resolution, RuleStep, StemResultVerbose, StepOutcome};
use std::io::{self, Write};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn write_trace(out: &mut impl Write, res: &StemResultVerbose, color: bool) -> io::Result<()> {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    writeln!(out, "\n{}", palette.bold(palette.paint(format!("⚙  Stemming: \"{}\"", res.term), ansi::CYAN)))?;

    match details.resolution {
        Resolution::PassThrough => {
            writeln!(out, "  {}", palette.dim("not stemmable (length or characters); lowercased only"))?;
        }
        Resolution::Direct => {
            writeln!(out, "  {}", palette.paint("✓ dictionary entry", ansi::GREEN))?;
        }
        Resolution::Cascade { .. } | Resolution::Exhausted => {
            writeln!(out, "{}", palette.paint("━━━ Cascade ━━━", ansi::GRAY))?;
            for step in &details.steps {
                writeln!(out, "  {}", fmt_step(step, &palette))?;
            }
        }
    }

    let how = match details.resolution {
        Resolution::PassThrough => "pass-through".to_string(),
        Resolution::Direct => "direct".to_string(),
        Resolution::Cascade { rule } => format!("hit at {rule}"),
        Resolution::Exhausted => "cascade exhausted".to_string(),
    };
    writeln!(
        out,
        "  {} {}  {} {}  {} {}",
        palette.dim("root:"),
        palette.bold(palette.paint(&res.stem, ansi::GREEN)),
        palette.dim("│"),
        palette.paint(how, ansi::BLUE),
        palette.dim("│ probes:"),
        palette.paint(format!("{} in {:?}", details.probes, details.total), ansi::YELLOW),
    )
}

fn fmt_step(step: &RuleStep, palette: &ansi::Palette) -> String {
    let marker = match step.outcome {
        StepOutcome::NotApplicable => return palette.dim(format!("· {:<11}", step.rule)),
        StepOutcome::RolledBack => palette.paint("↺", ansi::YELLOW),
        StepOutcome::Rewritten => palette.paint("→", ansi::CYAN),
    };
    let hit = if step.hit { palette.paint("✓ hit", ansi::GREEN) } else { palette.dim("✗") };
    format!(
        "{} {} {} {} {}  {}  {}",
        marker,
        palette.paint(format!("{:<11}", step.rule), ansi::BLUE),
        step.before,
        palette.dim("▶"),
        palette.bold(&step.after),
        hit,
        palette.dim(format!("({} probes)", step.probes)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kstem::{Dictionary, Options, stem_verbose_with};

    fn render(term: &str) -> String {
        let res = stem_verbose_with(term, Dictionary::shared(), &Options::default());
        let mut out = Vec::new();
        write_trace(&mut out, &res, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_report_lists_steps_and_root() {
        let text = render("ponies");
        assert!(text.contains("Stemming: \"ponies\""));
        assert!(text.contains("plural"));
        assert!(text.contains("ponies ▶ pony"));
        assert!(text.contains("hit at plural"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn direct_and_pass_through_skip_the_cascade() {
        assert!(render("theses").contains("dictionary entry"));
        assert!(!render("theses").contains("Cascade"));
        assert!(render("ok").contains("pass-through"));
    }
}
