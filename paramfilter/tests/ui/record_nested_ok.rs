use std::collections::HashMap;

use paramfilter::{ParamFilter, Record};

#[derive(Record)]
struct Credentials {
    user: String,
    password: String,
}

#[derive(Record)]
struct Request {
    region: String,
    credentials: Option<Box<Credentials>>,
    headers: HashMap<String, Vec<String>>,
}

fn main() {
    let filter = ParamFilter::new(["password"]).unwrap();
    let request = Request {
        region: "us-west-2".into(),
        credentials: Some(Box::new(Credentials {
            user: "peccy".into(),
            password: "p@ssw0rd".into(),
        })),
        headers: HashMap::new(),
    };

    let _ = filter.filter("Peccy Service", &request);
}
