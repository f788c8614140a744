/// Build the feature soup of one item.
///
/// The three fields are joined with a single space in the order
/// country, director, cast. Nothing is normalized or deduplicated.
#[inline]
pub fn compose_soup(production_country: &str, director: &str, cast: &str) -> String {
    let mut soup =
        String::with_capacity(production_country.len() + director.len() + cast.len() + 2);
    soup.push_str(production_country);
    soup.push(' ');
    soup.push_str(director);
    soup.push(' ');
    soup.push_str(cast);
    soup
}
