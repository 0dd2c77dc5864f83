use paramfilter::{ParamFilter, Record};

#[derive(Record)]
enum Auth {
    Anonymous,
    #[param(rename = "IAM")]
    Iam,
    Basic {
        user: String,
        #[param(rename = "Password")]
        pass: String,
    },
    Token(String, #[param(skip)] u64),
}

#[derive(Record)]
enum Never {}

fn main() {
    let filter = ParamFilter::new(["password"]).unwrap();
    for auth in [
        Auth::Anonymous,
        Auth::Iam,
        Auth::Basic {
            user: "peccy".into(),
            pass: "p@ssw0rd".into(),
        },
        Auth::Token("abc".into(), 0),
    ] {
        let _ = filter.filter("Peccy Service", &auth);
    }

    let _ = std::mem::size_of::<Never>();
}
