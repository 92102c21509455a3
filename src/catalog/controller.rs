use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::catalog::command::find_book_cmd::{FindBookCommand, FindBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{ConsoleError, Severity};
use crate::core::library::{LibraryError, LibraryResult};

const MENU_ITEMS: [&str; 6] = [
    "1 - Add book",
    "2 - Borrow book",
    "3 - Return book",
    "4 - Show all books",
    "5 - Search by ISBN",
    "6 - Exit",
];

#[derive(Debug, PartialEq, Clone)]
pub(crate) enum MenuOption {
    Add,
    Borrow,
    Return,
    List,
    Search,
    Exit,
    Invalid(String),
}

impl From<&str> for MenuOption {
    fn from(s: &str) -> Self {
        // surrounding blanks do not make a selection invalid, " 6 " still exits
        match s.trim() {
            "1" => MenuOption::Add,
            "2" => MenuOption::Borrow,
            "3" => MenuOption::Return,
            "4" => MenuOption::List,
            "5" => MenuOption::Search,
            "6" => MenuOption::Exit,
            other => MenuOption::Invalid(other.to_string()),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum Flow {
    Continue,
    Stop,
}

fn banner(title: &str, width: usize) -> String {
    let stars = "*".repeat(width);
    format!("\n{} {} {}", stars, title, stars)
}

fn describe(book: &BookDto) -> String {
    format!("Title: {} || Author: {} || ISBN: {} || Status: {}",
            book.title, book.author, book.isbn, book.status())
}

// Shell is the console front of the catalog: it reads one line per prompt, runs the matching
// command and prints the outcome. Closing the input ends the session like the exit option.
pub(crate) struct Shell<R, W> {
    catalog_service: Arc<dyn CatalogService>,
    reader: R,
    writer: W,
}

impl<R, W> Shell<R, W>
    where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>, reader: R, writer: W) -> Self {
        Self {
            catalog_service,
            reader,
            writer,
        }
    }

    pub(crate) async fn run(&mut self) -> LibraryResult<()> {
        loop {
            let flow = match self.show_menu().await? {
                Some(option) => self.dispatch(option).await?,
                None => Flow::Stop,
            };
            if flow == Flow::Stop {
                break;
            }
        }
        self.writer.flush().await?;
        Ok(())
    }

    async fn show_menu(&mut self) -> LibraryResult<Option<MenuOption>> {
        self.write_line(banner("LIBRARY SYSTEM MENU", 15).as_str()).await?;
        for item in MENU_ITEMS {
            self.write_line(item).await?;
        }
        let selection = self.prompt("Select an option (1-6): ").await?;
        Ok(selection.map(|s| MenuOption::from(s.as_str())))
    }

    async fn dispatch(&mut self, option: MenuOption) -> LibraryResult<Flow> {
        match option {
            MenuOption::Add => self.add_book().await,
            MenuOption::Borrow => self.borrow_book().await,
            MenuOption::Return => self.return_book().await,
            MenuOption::List => self.list_books().await,
            MenuOption::Search => self.search_book().await,
            MenuOption::Exit => {
                self.write_line("Goodbye!").await?;
                Ok(Flow::Stop)
            }
            MenuOption::Invalid(selection) => {
                debug!(selection = selection.as_str(), "rejected menu selection");
                self.write_line("\nError: You can only select an option between 1 and 6").await?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn add_book(&mut self) -> LibraryResult<Flow> {
        self.write_line(banner("ADD NEW BOOK", 10).as_str()).await?;
        let Some(title) = self.prompt("Enter the book title: ").await? else {
            return Ok(Flow::Stop);
        };
        let Some(author) = self.prompt("Enter the book author: ").await? else {
            return Ok(Flow::Stop);
        };
        let Some(isbn) = self.prompt("Enter the book ISBN (must contain 13 digits): ").await? else {
            return Ok(Flow::Stop);
        };
        let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str());
        match AddBookCommand::new(self.catalog_service.clone()).execute(req).await {
            Ok(res) => {
                self.write_line(format!("Book '{}' successfully added.", res.book.title).as_str()).await?;
            }
            Err(err) => self.report(err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn borrow_book(&mut self) -> LibraryResult<Flow> {
        self.write_line(banner("BORROW BOOK", 10).as_str()).await?;
        if self.catalog_service.count_books().await? == 0 {
            self.write_line("The system has no registered books. Cannot process a loan.").await?;
            return Ok(Flow::Continue);
        }
        let Some(isbn) = self.prompt("Enter the ISBN of the book to borrow: ").await? else {
            return Ok(Flow::Stop);
        };
        if let Some(book) = self.find_book(isbn.as_str()).await? {
            let req = BorrowBookCommandRequest::new(book);
            match BorrowBookCommand::new(self.catalog_service.clone()).execute(req).await {
                Ok(res) => {
                    self.write_line(format!("The book '{}' has been successfully borrowed.", res.book.title).as_str()).await?;
                }
                Err(err) => self.report(err).await?,
            }
        }
        Ok(Flow::Continue)
    }

    async fn return_book(&mut self) -> LibraryResult<Flow> {
        self.write_line(banner("RETURN BOOK", 10).as_str()).await?;
        if self.catalog_service.count_books().await? == 0 {
            self.write_line("The system has no registered books. Cannot process a return.").await?;
            return Ok(Flow::Continue);
        }
        let Some(isbn) = self.prompt("Enter the ISBN of the book to return: ").await? else {
            return Ok(Flow::Stop);
        };
        if let Some(book) = self.find_book(isbn.as_str()).await? {
            let req = ReturnBookCommandRequest::new(book);
            match ReturnBookCommand::new(self.catalog_service.clone()).execute(req).await {
                Ok(res) => {
                    self.write_line(format!("The book '{}' has been successfully returned.", res.book.title).as_str()).await?;
                }
                Err(err) => self.report(err).await?,
            }
        }
        Ok(Flow::Continue)
    }

    async fn list_books(&mut self) -> LibraryResult<Flow> {
        self.write_line(banner("BOOK CATALOG", 15).as_str()).await?;
        let res = match ListBooksCommand::new(self.catalog_service.clone()).execute(ListBooksCommandRequest::default()).await {
            Ok(res) => res,
            Err(err) => {
                self.report(err).await?;
                return Ok(Flow::Continue);
            }
        };
        if res.books.is_empty() {
            self.write_line("There are no books registered in the system at this time.").await?;
        }
        for (i, book) in res.books.iter().enumerate() {
            self.write_line(format!("{}. {}", i + 1, describe(book)).as_str()).await?;
        }
        Ok(Flow::Continue)
    }

    async fn search_book(&mut self) -> LibraryResult<Flow> {
        self.write_line(banner("SEARCH BOOK BY ISBN", 10).as_str()).await?;
        let Some(isbn) = self.prompt("Enter the book ISBN (must contain 13 digits): ").await? else {
            return Ok(Flow::Stop);
        };
        let _ = self.find_book(isbn.as_str()).await?;
        Ok(Flow::Continue)
    }

    // prints the found book or the reason it was not found
    async fn find_book(&mut self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        match FindBookCommand::new(self.catalog_service.clone()).execute(FindBookCommandRequest::new(isbn)).await {
            Ok(res) => {
                self.write_line(format!("Book found: {}", describe(&res.book)).as_str()).await?;
                Ok(Some(res.book))
            }
            Err(err) => {
                self.report(err).await?;
                Ok(None)
            }
        }
    }

    async fn report(&mut self, err: CommandError) -> LibraryResult<()> {
        let (severity, line): ConsoleError = err.into();
        match severity {
            Severity::Fatal => Err(LibraryError::runtime(line.as_str(), None)),
            Severity::Notice | Severity::Rejected => {
                debug!(severity = ?severity, "{}", line);
                self.write_line(line.as_str()).await
            }
        }
    }

    async fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }
        // bytes that are not utf-8 become U+FFFD, the line is then handled like any other input
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let len = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(Some(line))
    }

    async fn write_line(&mut self, line: &str) -> LibraryResult<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::controller::{MenuOption, Shell};
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    const DUNE: &str = "1\nDune\nFrank Herbert\n9780441013593\n";

    async fn run_session(input: &str) -> String {
        run_bytes_session(input.as_bytes()).await
    }

    async fn run_bytes_session(input: &[u8]) -> String {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        let mut output: Vec<u8> = vec![];
        let mut shell = Shell::new(svc, input, &mut output);
        shell.run().await.expect("should run session");
        String::from_utf8(output).expect("should be utf8")
    }

    #[tokio::test]
    async fn test_should_parse_menu_options() {
        assert_eq!(MenuOption::Add, MenuOption::from("1"));
        assert_eq!(MenuOption::Borrow, MenuOption::from(" 2 "));
        assert_eq!(MenuOption::Return, MenuOption::from("3"));
        assert_eq!(MenuOption::List, MenuOption::from("4"));
        assert_eq!(MenuOption::Search, MenuOption::from("5"));
        assert_eq!(MenuOption::Exit, MenuOption::from("6"));
        assert_eq!(MenuOption::Invalid("7".to_string()), MenuOption::from("7"));
        assert_eq!(MenuOption::Invalid("".to_string()), MenuOption::from(""));
    }

    #[tokio::test]
    async fn test_should_print_menu_and_exit() {
        let out = run_session("6\n").await;
        let expected = "\n*************** LIBRARY SYSTEM MENU ***************\n\
            1 - Add book\n2 - Borrow book\n3 - Return book\n4 - Show all books\n\
            5 - Search by ISBN\n6 - Exit\nSelect an option (1-6): Goodbye!\n";
        assert_eq!(expected, out.as_str());
    }

    #[tokio::test]
    async fn test_should_stop_at_end_of_input() {
        let out = run_session("").await;
        assert!(out.ends_with("Select an option (1-6): "));
        assert!(!out.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_should_stop_at_end_of_input_inside_command() {
        let out = run_session("1\nDune\n").await;
        assert!(out.ends_with("Enter the book author: "));
    }

    #[tokio::test]
    async fn test_should_reject_unknown_option() {
        let out = run_session("9\n6\n").await;
        assert!(out.contains("\nError: You can only select an option between 1 and 6\n"));
        assert_eq!(2, out.matches("LIBRARY SYSTEM MENU").count());
    }

    #[tokio::test]
    async fn test_should_add_and_list_books() {
        let out = run_session(format!("4\n{}1\nEmma\nJane Austen\n978-0141-439587\n4\n6\n", DUNE).as_str()).await;
        assert!(out.contains("There are no books registered in the system at this time."));
        assert!(out.contains("\n********** ADD NEW BOOK **********\n"));
        assert!(out.contains("Book 'Dune' successfully added."));
        assert!(out.contains("Book 'Emma' successfully added."));
        assert!(out.contains("\n*************** BOOK CATALOG ***************\n"));
        assert!(out.contains("1. Title: Dune || Author: Frank Herbert || ISBN: 9780441013593 || Status: Available\n\
            2. Title: Emma || Author: Jane Austen || ISBN: 9780141439587 || Status: Available\n"));
    }

    #[tokio::test]
    async fn test_should_report_add_errors() {
        let out = run_session(format!("1\nX\nY\n12345\n{}{}6\n", DUNE, DUNE).as_str()).await;
        assert!(out.contains("Error: The ISBN must have exactly 13 numeric digits."));
        assert!(out.contains("Error: A book with ISBN 9780441013593 already exists in the library."));
        assert_eq!(1, out.matches("successfully added").count());
    }

    #[tokio::test]
    async fn test_should_refuse_borrow_and_return_on_empty_catalog() {
        let out = run_session("2\n3\n6\n").await;
        assert!(out.contains("\n********** BORROW BOOK **********\nThe system has no registered books. Cannot process a loan.\n"));
        assert!(out.contains("\n********** RETURN BOOK **********\nThe system has no registered books. Cannot process a return.\n"));
        assert!(!out.contains("Enter the ISBN"));
    }

    #[tokio::test]
    async fn test_should_borrow_and_return_book() {
        let input = format!("{}2\n978-0441-013593\n2\n9780441013593\n4\n3\n9780441013593\n3\n9780441013593\n6\n", DUNE);
        let out = run_session(input.as_str()).await;
        assert!(out.contains("Book found: Title: Dune || Author: Frank Herbert || ISBN: 9780441013593 || Status: Available\n\
            The book 'Dune' has been successfully borrowed."));
        assert!(out.contains("Book found: Title: Dune || Author: Frank Herbert || ISBN: 9780441013593 || Status: Borrowed\n\
            Error: The book 'Dune' is currently on loan."));
        assert!(out.contains("1. Title: Dune || Author: Frank Herbert || ISBN: 9780441013593 || Status: Borrowed"));
        assert!(out.contains("The book 'Dune' has been successfully returned."));
        assert!(out.contains("Error: The book 'Dune' was already available in our system."));
    }

    #[tokio::test]
    async fn test_should_not_borrow_unknown_book() {
        let out = run_session(format!("{}2\n9780000000000\n2\nabc\n6\n", DUNE).as_str()).await;
        assert!(out.contains("Enter the ISBN of the book to borrow: There are no books with that ISBN.\n"));
        assert!(out.contains("Enter the ISBN of the book to borrow: Error: The ISBN must have exactly 13 numeric digits.\n"));
        assert!(!out.contains("successfully borrowed"));
    }

    #[tokio::test]
    async fn test_should_search_books() {
        let out = run_session(format!("{}5\n978 0441 013593\n5\n9780000000000\n6\n", DUNE).as_str()).await;
        assert!(out.contains("\n********** SEARCH BOOK BY ISBN **********\n"));
        assert!(out.contains("Book found: Title: Dune || Author: Frank Herbert || ISBN: 9780441013593 || Status: Available\n"));
        assert!(out.contains("There are no books with that ISBN.\n"));
    }

    #[tokio::test]
    async fn test_should_accept_windows_line_endings() {
        let out = run_session("1\r\nDune\r\nFrank Herbert\r\n9780441013593\r\n6\r\n").await;
        assert!(out.contains("Book 'Dune' successfully added."));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_should_keep_running_after_invalid_utf8_input() {
        let out = run_bytes_session(b"1\nDu\xffne\nFrank Herbert\n9780441013593\n4\n9\xfe\n6\n").await;
        assert!(out.contains("Book 'Du\u{fffd}ne' successfully added."));
        assert!(out.contains("1. Title: Du\u{fffd}ne || Author: Frank Herbert || ISBN: 9780441013593 || Status: Available"));
        assert!(out.contains("Error: You can only select an option between 1 and 6"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_should_exit_on_padded_selection() {
        let out = run_session(" 6 \n").await;
        assert!(!out.contains("Error: You can only select"));
        assert!(out.ends_with("Goodbye!\n"));
    }
}
