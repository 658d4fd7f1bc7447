use criterion::{black_box, criterion_group, criterion_main, Criterion};
use search_service::models::request::SortField;
use search_service::models::responses::Book;
use search_service::services::goodreads::{parse_works, sort_books};

fn create_sample_xml(works: usize) -> String {
    let mut xml = String::from("<GoodreadsResponse><search><results>");
    for i in 0..works {
        xml.push_str(&format!(
            "<work><id type=\"integer\">{i}</id><best_book type=\"Book\">\
             <title>Test Book {}</title><author><name>Test Author {}</name></author>\
             <image_url>https://images.example/{i}.jpg</image_url></best_book></work>",
            (i * 7919) % works,
            i % 50,
        ));
    }
    xml.push_str("</results></search></GoodreadsResponse>");
    xml
}

fn create_sample_books(count: usize) -> Vec<Book> {
    (0..count)
        .map(|i| Book {
            author: format!("Test Author {}", (i * 31) % 50),
            title: format!("Test Book {}", (i * 7919) % count),
            image: format!("https://images.example/{}.jpg", i),
        })
        .collect()
}

fn benchmark_parse_works(c: &mut Criterion) {
    // Goodreads returns 20 works per page.
    let page = create_sample_xml(20);
    c.bench_function("parse_works_page", |b| {
        b.iter(|| parse_works(black_box(&page)).unwrap())
    });

    let large = create_sample_xml(2000);
    c.bench_function("parse_works_large", |b| {
        b.iter(|| parse_works(black_box(&large)).unwrap())
    });
}

fn benchmark_sort_books(c: &mut Criterion) {
    let books = create_sample_books(1000);

    c.bench_function("sort_books_by_title", |b| {
        b.iter(|| {
            let mut books = books.clone();
            sort_books(black_box(&mut books), SortField::Title);
            books
        })
    });

    c.bench_function("sort_books_by_author", |b| {
        b.iter(|| {
            let mut books = books.clone();
            sort_books(black_box(&mut books), SortField::Author);
            books
        })
    });
}

criterion_group!(benches, benchmark_parse_works, benchmark_sort_books);
criterion_main!(benches);
