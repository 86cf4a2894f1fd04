include!("../../lib.rs");
use std::io;
use std::io::Write;

use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::trace::setup_tracing;

const DEFAULT_CATALOG_PATH: &str = "library.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing();

    let path = std::env::var("PLM_CATALOG_PATH")
        .unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
    let config = Configuration::new(path.as_str());
    let service = factory::create_catalog_service(&config, RepositoryStore::JsonFile).await;

    println!("Welcome to your Personal Library Manager!");

    loop {
        println!("\nMenu");
        println!("1. Add a book");
        println!("2. Remove a book");
        println!("3. Search for a book");
        println!("4. Display all books");
        println!("5. Display statistics");
        println!("6. Exit");

        match prompt("\nEnter your choice: ")?.as_str() {
            "1" => add_book(&config, service.as_ref()).await?,
            "2" => remove_book(service.as_ref()).await?,
            "3" => search_books(service.as_ref()).await?,
            "4" => list_books(service.as_ref()).await?,
            "5" => show_stats(service.as_ref()).await?,
            "6" => {
                println!("\nGoodbye!");
                break;
            }
            _ => println!("\nInvalid choice. Please try again."),
        }
    }
    Ok(())
}

async fn add_book(config: &Configuration, service: &dyn CatalogService) -> io::Result<()> {
    println!("\nAdd a Book");
    let title = prompt_required("Enter the book title: ")?;
    let author = prompt_required("Enter the author: ")?;
    let year = prompt_year(config)?;
    let genre = prompt_required("Enter the genre: ")?;
    let read_status = prompt_yes_no("Have you read this book? (yes/no): ")?;

    let book = BookDto::new(title.as_str(), author.as_str(), year, genre.as_str(), read_status);
    // the store re-validates on its own; the prompts above only spare the
    // user a round trip
    match service.add_book(&book).await {
        Ok(_) => println!("Book added successfully!"),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

async fn remove_book(service: &dyn CatalogService) -> io::Result<()> {
    println!("\nRemove a Book");
    let title = prompt_required("Enter the title of the book to remove: ")?;
    match service.remove_book(title.as_str()).await {
        Ok(_) => println!("Book removed successfully!"),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

async fn search_books(service: &dyn CatalogService) -> io::Result<()> {
    println!("\nSearch for a Book");
    let query = prompt_required("Enter search term (title or author): ")?;
    match service.search_books(query.as_str()).await {
        Ok(books) if books.is_empty() => println!("\nNo matching books found."),
        Ok(books) => {
            println!("\nMatching Books:");
            print_books(&books);
        }
        Err(err) => println!("{}", err),
    }
    Ok(())
}

async fn list_books(service: &dyn CatalogService) -> io::Result<()> {
    match service.list_books().await {
        Ok(books) if books.is_empty() => println!("\nNo books in the library."),
        Ok(books) => {
            println!("\nYour Library:");
            print_books(&books);
        }
        Err(err) => println!("{}", err),
    }
    Ok(())
}

async fn show_stats(service: &dyn CatalogService) -> io::Result<()> {
    match service.get_stats().await {
        Ok(stats) => {
            println!("\nDisplay Statistics");
            println!("Total books: {}", stats.total_books);
            println!("Books read: {}", stats.read_books);
            println!("Books unread: {}", stats.unread_books);
            if stats.total_books > 0 {
                let read_percentage = (stats.read_books as f64 / stats.total_books as f64) * 100.0;
                println!("Percentage read: {:.1}%", read_percentage);
                println!("\nGenre distribution:");
                for (genre, count) in &stats.genre_distribution {
                    println!("{}: {} books", genre, count);
                }
            }
        }
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn print_books(books: &[BookDto]) {
    for (ndx, book) in books.iter().enumerate() {
        let status = if book.is_read() { "Read" } else { "Unread" };
        println!("{}. {} by {} ({}) - {} - {}",
                 ndx + 1, book.title, book.author, book.year, book.genre, status);
    }
}

fn prompt(text: &str) -> io::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_required(text: &str) -> io::Result<String> {
    loop {
        let value = prompt(text)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("This field cannot be empty. Please try again.");
    }
}

fn prompt_year(config: &Configuration) -> io::Result<i32> {
    loop {
        match prompt("Enter the publication year: ")?.parse::<i32>() {
            Ok(year) if year >= config.min_year && year <= config.max_year => return Ok(year),
            Ok(_) => println!("Please enter a year between {} and {}", config.min_year, config.max_year),
            Err(_) => println!("Please enter a valid year."),
        }
    }
}

fn prompt_yes_no(text: &str) -> io::Result<bool> {
    loop {
        match prompt(text)?.to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => println!("Please enter 'yes' or 'no'"),
        }
    }
}
