pub mod geekdo;
