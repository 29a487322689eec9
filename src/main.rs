use image_to_docx::cli::process_args;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let result = process_args(args);
    result.emit();
    std::process::exit(result.exit_code());
}
