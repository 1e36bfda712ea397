use std::env;
use std::process;

use regex_nfa::compile;

fn main() {
    let mut args = env::args().skip(1);
    let pattern = match args.next() {
        Some(p) => p,
        None => {
            eprintln!("usage: regex-nfa <pattern> [subject...]");
            process::exit(2);
        }
    };

    let nfa = match compile(&pattern) {
        Ok(nfa) => nfa,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    println!("pattern: {:?}", pattern);
    println!("{}", nfa);

    for subject in args {
        let verdict = if nfa.is_match(&subject) {
            "match"
        } else {
            "no match"
        };
        println!("{:?}: {}", subject, verdict);
    }
}
