use std::env;
use std::process;

use domain::adapters::memory_storage::InMemoryStorage;
use domain::service::ParamService;
use domain::suffix::RandomSuffixGenerator;
use domain::CoreError;

fn print_usage() {
    eprintln!(
        "{}\n\nUsage:\n  domain handle <param> [<param> ...]\n\nNotes:\n  - Appends a random 10-character suffix to each param, stores the result,\n    and prints the stored values followed by the most recent one.\n  - This demo CLI uses in-memory storage; data is not persisted across runs.",
        domain::about()
    );
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1); // skip program name

    let Some(cmd) = args.next() else {
        print_usage();
        return Ok(());
    };

    // Construct a demo service with in-memory storage
    let storage = InMemoryStorage::new();
    let suffixer = RandomSuffixGenerator::default();
    let svc = ParamService::new(storage, suffixer);

    match cmd.as_str() {
        "handle" => {
            let params: Vec<String> = args.collect();
            if params.is_empty() {
                return Err("missing <param> for handle".into());
            }
            for param in &params {
                match svc.handle(param) {
                    Ok(stored) => println!("stored: {}", stored),
                    Err(e) => return Err(format!("handle failed: {}", e)),
                }
            }
            match svc.latest() {
                Ok(latest) => {
                    println!("latest: {}", latest);
                    Ok(())
                }
                Err(CoreError::EmptyStorage) => Err("empty storage".into()),
                Err(e) => Err(format!("retrieve failed: {}", e)),
            }
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn main() {
    if let Err(msg) = run() {
        eprintln!("error: {}", msg);
        process::exit(1);
    }
}
