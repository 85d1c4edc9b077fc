pub mod domain;
pub mod dto;

pub mod command {
    pub mod list_patrons_cmd;
}
