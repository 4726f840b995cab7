//! Command-line driver: hashes one file and reports the digest and the
//! elapsed wall-clock time.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use sha512::stream::digest_file;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: sha512 <file>");
        return ExitCode::FAILURE;
    }

    let start = Instant::now();

    let digest = match digest_file(&args[1]) {
        Ok(digest) => digest,
        Err(err) => {
            eprintln!("sha512: {}: {err}", args[1]);
            return ExitCode::FAILURE;
        }
    };

    let elapsed = start.elapsed();

    println!("{digest}");
    println!("Elapsed Time: {:.3} Seconds", elapsed.as_secs_f64());

    ExitCode::SUCCESS
}
