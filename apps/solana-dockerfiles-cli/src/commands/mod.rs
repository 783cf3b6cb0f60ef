pub mod generate_dockerfiles;
