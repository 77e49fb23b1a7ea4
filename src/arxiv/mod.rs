// arXiv export API: HTTP client and Atom feed parsing.
//
// One bounded query per run. The response is parsed into plain Paper
// records and everything downstream of this module is pure.

pub mod client;
pub mod feed;
