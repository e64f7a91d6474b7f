// tests/scan_properties.rs
//
// Property-based checks for the output scanner.

use proptest::prelude::*;

use sourcepredict_wf::config::TriageSection;
use sourcepredict_wf::triage::{DiagnosticPatterns, scan};

#[derive(Debug, Clone)]
enum Line {
    Step(u8),
    Accuracy(u8),
    Exception(u8),
    Noise(String),
}

impl Line {
    fn render(&self) -> String {
        match self {
            Line::Step(n) => format!("Step {n}: stage"),
            Line::Accuracy(n) => format!("Testing Accuracy: 0.{n}"),
            Line::Exception(n) => format!("Exception: error {n}"),
            Line::Noise(s) => format!("log {s}"),
        }
    }
}

fn line_strategy() -> impl Strategy<Value = Line> {
    prop_oneof![
        any::<u8>().prop_map(Line::Step),
        any::<u8>().prop_map(Line::Accuracy),
        any::<u8>().prop_map(Line::Exception),
        "[a-z ]{0,12}".prop_map(Line::Noise),
    ]
}

proptest! {
    #[test]
    fn progress_count_is_min_of_steps_and_accuracies(lines in prop::collection::vec(line_strategy(), 0..40)) {
        let patterns = DiagnosticPatterns::from_config(&TriageSection::default()).unwrap();
        let text: Vec<String> = lines.iter().map(Line::render).collect();
        let diag = scan(&text.join("\n"), &patterns);

        let steps: Vec<String> = lines.iter().filter(|l| matches!(l, Line::Step(_))).map(Line::render).collect();
        let accs: Vec<String> = lines.iter().filter(|l| matches!(l, Line::Accuracy(_))).map(Line::render).collect();
        let excs: Vec<String> = lines.iter().filter(|l| matches!(l, Line::Exception(_))).map(Line::render).collect();

        prop_assert_eq!(diag.progress.len(), steps.len().min(accs.len()));
        for (i, report) in diag.progress.iter().enumerate() {
            prop_assert_eq!(&report.step, &steps[i]);
            prop_assert_eq!(&report.accuracy, &accs[i]);
        }
        prop_assert_eq!(diag.exceptions, excs);
        prop_assert_eq!(
            diag.progress.len() + diag.unpaired_steps + diag.unpaired_accuracies,
            steps.len().max(accs.len())
        );
    }
}
