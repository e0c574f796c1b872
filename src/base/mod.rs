pub mod bosonic;
