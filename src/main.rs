use std::process::ExitCode;

use safe_math::Calculator;

const SAMPLES: [&str; 3] = ["2 + 2", "10 * 5 + 3", "(100 - 20) / 4"];

fn main() -> ExitCode {
  let args: Vec<String> = std::env::args().skip(1).collect();
  let expressions: Vec<&str> = if args.is_empty() {
    SAMPLES.to_vec()
  } else {
    args.iter().map(String::as_str).collect()
  };

  let calculator = Calculator::default();
  let mut failed = false;
  for expression in expressions {
    match calculator.evaluate(expression) {
      Ok(result) => println!("{} = {}", expression, result),
      Err(err) => {
        failed = true;
        eprintln!("{}: {:?}: {}", expression, err.kind(), err);
      }
    }
  }
  if failed {
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  }
}
