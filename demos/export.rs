use plainpdf::{export, ExportRequest};
use std::io::Read;

// usage: echo '{"title":"Week 3 notes","text":"Answer: (3/4)"}' | cargo run --example export
fn main() {
    env_logger::init();

    // read the request body the way a handler would receive it
    let mut body = Vec::new();
    std::io::stdin()
        .read_to_end(&mut body)
        .expect("can read stdin");

    let request = ExportRequest::from_body(&body).expect("valid request body");
    let response = match export(&request) {
        Ok(response) => response,
        Err(err) if err.is_client_error() => {
            eprintln!("rejected: {err}");
            std::process::exit(2);
        }
        Err(err) => panic!("export failed: {err}"),
    };

    println!("Content-Type: {}", response.content_type());
    println!("Content-Disposition: {}", response.content_disposition());

    // save the download where the browser would, under its sanitized name
    std::fs::write(&response.filename, &response.body).expect("can write output file");
}
