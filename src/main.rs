use descalc::Evaluator;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buffer = String::new();
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    let evaluator = Evaluator::<f64>::new();
    loop {
        stdout.write_all("> ".as_bytes())?;
        stdout.flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            break;
        }
        let line = buffer.trim();
        if !line.is_empty() {
            match evaluator.eval(line) {
                Ok(x) => println!("{x}"),
                Err(e) => eprintln!("Error {e}"),
            }
        }
        buffer.clear();
    }
    Ok(())
}
