mod property;
mod value;
