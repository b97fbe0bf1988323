/*!
"Standard" extensions used by the parser that aren't (yet) in `std`.
*/

pub(crate) mod char;
