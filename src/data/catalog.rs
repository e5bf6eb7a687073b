//! Book catalog
//!
//! Fixed in-memory collection of catalog entries, seeded once at
//! startup and read-only afterwards.

use chrono::NaiveDate;

use super::models::Book;

/// The book catalog
///
/// Owns the fixed collection of [`Book`] records. There is no insert,
/// update, or delete: the corpus is seeded at construction and only
/// read afterwards.
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create a catalog from an explicit collection
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Create a catalog holding the fixed seed collection
    pub fn with_seed() -> Self {
        Self::new(seed_books())
    }

    /// Look up a book by id
    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// All books, in catalog order
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    /// Books in one category (case-insensitive match, catalog order)
    ///
    /// Returns an empty vec rather than failing when nothing matches.
    pub fn by_category(&self, category: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Distinct categories, in catalog order (for filter widgets)
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for book in &self.books {
            if !categories.contains(&book.category.as_str()) {
                categories.push(&book.category);
            }
        }
        categories
    }

    /// Distinct languages, in catalog order (for filter widgets)
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = Vec::new();
        for book in &self.books {
            if !languages.contains(&book.language.as_str()) {
                languages.push(&book.language);
            }
        }
        languages
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Seed date constants are known-valid, so the panic path is unreachable.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// The fixed six-book seed collection
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: "1".to_string(),
            title: "The Art of Clean Code".to_string(),
            author: "Robert C. Martin".to_string(),
            description: "A comprehensive guide to writing clean, maintainable code that stands the test of time.".to_string(),
            cover_url: "https://images.pexels.com/photos/1029141/pexels-photo-1029141.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            content_url: "/sample.pdf".to_string(),
            category: "Programming".to_string(),
            tags: vec![
                "Software Development".to_string(),
                "Best Practices".to_string(),
                "Clean Code".to_string(),
            ],
            published_date: date(2023, 1, 15),
            pages: 350,
            rating: 4.8,
            total_ratings: 1247,
            downloads: 15623,
            language: "English".to_string(),
            file_size: "12.5 MB".to_string(),
        },
        Book {
            id: "2".to_string(),
            title: "Digital Design Principles".to_string(),
            author: "Sarah Johnson".to_string(),
            description: "Master the fundamentals of digital design with modern techniques and best practices.".to_string(),
            cover_url: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            content_url: "/sample.pdf".to_string(),
            category: "Design".to_string(),
            tags: vec![
                "UI/UX".to_string(),
                "Design Systems".to_string(),
                "Typography".to_string(),
            ],
            published_date: date(2023, 2, 20),
            pages: 280,
            rating: 4.6,
            total_ratings: 892,
            downloads: 9534,
            language: "English".to_string(),
            file_size: "18.2 MB".to_string(),
        },
        Book {
            id: "3".to_string(),
            title: "Machine Learning Fundamentals".to_string(),
            author: "Dr. Michael Chen".to_string(),
            description: "An accessible introduction to machine learning concepts and practical applications.".to_string(),
            cover_url: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            content_url: "/sample.pdf".to_string(),
            category: "Technology".to_string(),
            tags: vec![
                "AI".to_string(),
                "Data Science".to_string(),
                "Python".to_string(),
            ],
            published_date: date(2023, 3, 10),
            pages: 420,
            rating: 4.9,
            total_ratings: 2156,
            downloads: 23847,
            language: "English".to_string(),
            file_size: "25.7 MB".to_string(),
        },
        Book {
            id: "4".to_string(),
            title: "Modern JavaScript Mastery".to_string(),
            author: "Alex Rodriguez".to_string(),
            description: "Deep dive into modern JavaScript features, frameworks, and development patterns.".to_string(),
            cover_url: "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            content_url: "/sample.pdf".to_string(),
            category: "Programming".to_string(),
            tags: vec![
                "JavaScript".to_string(),
                "Web Development".to_string(),
                "ES6+".to_string(),
            ],
            published_date: date(2023, 4, 5),
            pages: 380,
            rating: 4.7,
            total_ratings: 1583,
            downloads: 18932,
            language: "English".to_string(),
            file_size: "16.8 MB".to_string(),
        },
        Book {
            id: "5".to_string(),
            title: "Entrepreneurship in the Digital Age".to_string(),
            author: "Emma Thompson".to_string(),
            description: "Navigate the modern business landscape with proven strategies for digital entrepreneurs.".to_string(),
            cover_url: "https://images.pexels.com/photos/3184418/pexels-photo-3184418.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            content_url: "/sample.pdf".to_string(),
            category: "Business".to_string(),
            tags: vec![
                "Startup".to_string(),
                "Digital Marketing".to_string(),
                "Strategy".to_string(),
            ],
            published_date: date(2023, 5, 12),
            pages: 320,
            rating: 4.5,
            total_ratings: 743,
            downloads: 6234,
            language: "English".to_string(),
            file_size: "14.3 MB".to_string(),
        },
        Book {
            id: "6".to_string(),
            title: "The Psychology of User Experience".to_string(),
            author: "Dr. Lisa Wang".to_string(),
            description: "Understanding human behavior to create better digital experiences and interfaces.".to_string(),
            cover_url: "https://images.pexels.com/photos/1181677/pexels-photo-1181677.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            content_url: "/sample.pdf".to_string(),
            category: "Psychology".to_string(),
            tags: vec![
                "UX Research".to_string(),
                "Cognitive Science".to_string(),
                "Design Psychology".to_string(),
            ],
            published_date: date(2023, 6, 18),
            pages: 290,
            rating: 4.8,
            total_ratings: 967,
            downloads: 11245,
            language: "English".to_string(),
            file_size: "13.9 MB".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_six_books() {
        let catalog = Catalog::with_seed();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn get_returns_book_for_known_id() {
        let catalog = Catalog::with_seed();
        let book = catalog.get("3").unwrap();
        assert_eq!(book.title, "Machine Learning Fundamentals");
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let catalog = Catalog::with_seed();
        assert!(catalog.get("999").is_none());
    }

    #[test]
    fn by_category_matches_case_insensitively() {
        let catalog = Catalog::with_seed();
        let programming = catalog.by_category("programming");
        assert_eq!(programming.len(), 2);
        assert!(programming.iter().all(|b| b.category == "Programming"));
    }

    #[test]
    fn by_category_returns_empty_for_unknown_category() {
        let catalog = Catalog::with_seed();
        assert!(catalog.by_category("Cooking").is_empty());
    }

    #[test]
    fn categories_are_distinct_and_in_catalog_order() {
        let catalog = Catalog::with_seed();
        assert_eq!(
            catalog.categories(),
            vec!["Programming", "Design", "Technology", "Business", "Psychology"]
        );
    }

    #[test]
    fn languages_are_distinct() {
        let catalog = Catalog::with_seed();
        assert_eq!(catalog.languages(), vec!["English"]);
    }
}
