pub mod brown;
pub mod conners3;
pub mod kabc_ii;
pub mod nepsy_ii;
pub mod tea_ch;
pub mod wisc_v;
