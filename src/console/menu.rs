pub const MENU: &str = "\n====== Library Management System ======\n\
1. Add New Book\n\
2. Search Book (ISBN or Title)\n\
3. Update Book Information\n\
4. Borrow Book\n\
5. Return Book\n\
6. Display All Books\n\
7. Display All Users\n\
0. Exit\n";

pub const SELECT_PROMPT: &str = "Select an option: ";

// MenuOption is the numeric choice typed at the main menu
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuOption {
    AddBook,
    Search,
    UpdateBook,
    Borrow,
    Return,
    ListBooks,
    ListUsers,
    Exit,
}

impl MenuOption {
    // Surrounding whitespace is ignored; anything but 0-7 is rejected.
    pub fn parse(input: &str) -> Option<MenuOption> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuOption::AddBook),
            2 => Some(MenuOption::Search),
            3 => Some(MenuOption::UpdateBook),
            4 => Some(MenuOption::Borrow),
            5 => Some(MenuOption::Return),
            6 => Some(MenuOption::ListBooks),
            7 => Some(MenuOption::ListUsers),
            0 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

// MenuCommand is a fully collected menu request, ready for dispatch
#[derive(Debug, PartialEq, Clone)]
pub enum MenuCommand {
    AddBook {
        title: String,
        author: String,
        isbn: String,
    },
    Search {
        query: String,
    },
    UpdateBook {
        isbn: String,
        title: String,
        author: String,
    },
    Borrow {
        user_id: String,
        isbn: String,
    },
    Return {
        user_id: String,
        isbn: String,
    },
    ListBooks,
    ListUsers,
    Exit,
    Invalid {
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use crate::console::menu::MenuOption;

    #[test]
    fn test_should_parse_menu_options() {
        assert_eq!(Some(MenuOption::AddBook), MenuOption::parse("1"));
        assert_eq!(Some(MenuOption::Search), MenuOption::parse(" 2 "));
        assert_eq!(Some(MenuOption::UpdateBook), MenuOption::parse("3"));
        assert_eq!(Some(MenuOption::Borrow), MenuOption::parse("4"));
        assert_eq!(Some(MenuOption::Return), MenuOption::parse("5"));
        assert_eq!(Some(MenuOption::ListBooks), MenuOption::parse("6"));
        assert_eq!(Some(MenuOption::ListUsers), MenuOption::parse("7\r"));
        assert_eq!(Some(MenuOption::Exit), MenuOption::parse("0"));
    }

    #[test]
    fn test_should_reject_unknown_options() {
        assert_eq!(None, MenuOption::parse("8"));
        assert_eq!(None, MenuOption::parse("-1"));
        assert_eq!(None, MenuOption::parse(""));
        assert_eq!(None, MenuOption::parse("borrow"));
        assert_eq!(None, MenuOption::parse("99999999999999999999"));
    }
}
