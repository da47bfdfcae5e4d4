use fx_compute::{calculus, ctxt::Ctxt, eval::Eval};
use fx_graph::{AnalyzedExpr, FunctionKind, GraphPoint};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};

/// The view domain used when annotating expressions, matching a grapher's reset view.
const VIEW: (f64, f64) = (-10.0, 10.0);

/// The probe point used to spot-check an expression's value.
const PROBE: f64 = 1.0;

/// Prints a labeled list of points, to a maximum of 3 decimal places for each coordinate.
fn print_points(label: &str, points: &[GraphPoint<f64>]) {
    if points.is_empty() {
        return;
    }
    let formatted = points
        .iter()
        .map(|point| format!("({:.3}, {:.3})", point.0, point.1))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{}: {}", label, formatted);
}

/// Classifies the given input and prints what a grapher would display for it, or reports the
/// failure to stderr.
fn process(input: &str) {
    let analyzed = AnalyzedExpr::parse(input);
    let Some(expr) = analyzed.expr() else {
        if let Some(err) = analyzed.error() {
            err.report_to_stderr("input", analyzed.source());
        }
        return;
    };

    // validate with the same probe a grapher runs before accepting a function, so evaluation
    // errors (unknown names, wrong arity) are reported with their spans
    let mut ctxt = Ctxt::default();
    ctxt.add_var("x", PROBE);
    if let Err(err) = expr.eval(&mut ctxt) {
        err.report_to_stderr("input", analyzed.source());
        return;
    }

    match analyzed.kind {
        FunctionKind::Plain => {
            match calculus::eval_at(expr, &mut ctxt, PROBE) {
                Some(value) => println!("f({}) = {}", PROBE, value),
                None => println!("f({}) is undefined", PROBE),
            }

            let features = analyzed.features(VIEW);
            print_points("roots", &features.roots);
            print_points("extrema", &features.extrema);
        },
        FunctionKind::Integral { lower, upper } => {
            if let Some(value) = analyzed.integral_value() {
                if value.is_finite() {
                    println!(
                        "integral of {} from {} to {} ≈ {:.4}",
                        analyzed.source(), lower, upper, value,
                    );
                } else {
                    println!(
                        "integral of {} from {} to {} is undefined",
                        analyzed.source(), lower, upper,
                    );
                }
            }
        },
        FunctionKind::Derivative => {
            match calculus::derivative(expr, &mut ctxt, PROBE) {
                Some(value) => println!("f'({}) ≈ {:.4}", PROBE, value),
                None => println!("f'({}) is undefined", PROBE),
            }
        },
    }
}

fn main() {
    if !io::stdin().is_terminal() {
        // read expressions from stdin, one per line
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            process(&line);
        }
        return;
    }

    // run the repl / interactive mode
    let mut rl = DefaultEditor::new().unwrap();

    fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        process(&input);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }
}
