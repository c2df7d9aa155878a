pub mod alphabets;
pub mod encode;
pub mod run;
