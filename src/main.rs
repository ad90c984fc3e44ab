use action_launcher::launch;

fn main() {
    match launch::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("action-launcher: {e:#}");
            std::process::exit(1);
        }
    }
}
