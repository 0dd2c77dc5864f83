use paramfilter::{ParamFilter, Record};

struct Connection {
    _fd: i32,
}

#[derive(Record)]
struct Client {
    endpoint: String,
    #[param(skip)]
    connection: Connection,
}

fn main() {
    let filter = ParamFilter::new(["endpoint"]).unwrap();
    let client = Client {
        endpoint: "https://example.com".into(),
        connection: Connection { _fd: 3 },
    };

    let _ = &client.connection;
    let _ = filter.filter("Peccy Service", &client);
}
