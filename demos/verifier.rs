use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, LineWriter, Write};

use lotto_rs::{segment, Token};

pub fn render_picks(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text())
        .collect::<Vec<_>>()
        .join(",")
}

fn main() {
    // RUST_LOG=debug surfaces the fit trace of the search
    env_logger::init();

    // simple command line interface
    let args: Vec<_> = std::env::args().collect();
    assert!(
        args.len() == 3,
        "should only specify the input file and output file"
    );
    let input_filename = &args[1];
    let output_filename = &args[2];
    let input_file = File::open(input_filename).expect("input file not exists");
    let lines = io::BufReader::new(input_file).lines();

    let mut opts = OpenOptions::new();
    opts.create(true).write(true);
    let output_file = opts.open(output_filename).expect("output file not exists");
    let mut writer = LineWriter::new(output_file);

    for line in lines {
        let line = line.unwrap();
        let text = line.trim();
        let rendered = match segment(text) {
            Ok(tokens) => render_picks(&tokens),
            Err(reason) => format!("no lotto found ({})", reason),
        };
        writer
            .write_all(format!("{}: {}\n", text, rendered).as_bytes())
            .unwrap();
    }
    writer.flush().unwrap();
}
