use std::process::exit;

use miniml::printer::PrettyPrinter;

fn main() {
    let input = "let rec f = false in ()";
    match miniml::parse(input) {
        Ok(expr) => {
            println!("INPUT:  {input}");
            println!("OUTPUT: {}", PrettyPrinter::print(&expr));
        }
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    }
}
