use std::marker::PhantomData;

use paramfilter::{ParamFilter, Record};

struct NotParams;

#[derive(Record)]
struct Page<'a, T, M> {
    items: &'a [T],
    next_token: Option<String>,
    _marker: PhantomData<M>,
}

fn main() {
    let filter = ParamFilter::new(["next_token"]).unwrap();
    let items = [1_u32, 2, 3];
    let page: Page<'_, u32, NotParams> = Page {
        items: &items,
        next_token: Some("abc".into()),
        _marker: PhantomData,
    };

    let _ = filter.filter("Peccy Service", &page);
}
