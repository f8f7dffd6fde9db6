use crate::browser::Session;
use crate::error::Result;
use crate::pages::{BasePage, SelectorMap};

/// Category opened when no explicit path is given.
///
/// The value is an identifier from the store's own catalog taxonomy; if the
/// store renumbers its categories this default silently points elsewhere.
const DEFAULT_CATEGORY: &str = "58";

/// Fields the shopping workflows reference
const SELECTORS: &[(&str, &str)] = &[
    ("product_list", ".productlist"),
    ("product_cells", ".productlist .col-md-3"),
    ("product_title", ".productname"),
    ("quantity", "#product_quantity"),
    ("add_to_cart", "a[title='Add to Cart']"),
    ("cart_panel", ".contentpanel"),
    ("cart_quantity", ".quantity input"),
];

/// Page object for category browsing and the product/cart flow
pub struct ShoppingPage<'s> {
    base: BasePage<'s>,
    selectors: SelectorMap,
}

impl<'s> ShoppingPage<'s> {
    pub fn new(session: &'s Session) -> Result<Self> {
        Ok(Self { base: BasePage::new(session), selectors: SelectorMap::from_pairs(SELECTORS)? })
    }

    /// Open the default category
    pub fn visit(&self) -> Result<&Self> {
        self.visit_category(DEFAULT_CATEGORY)
    }

    /// Open a category by its catalog path identifier
    pub fn visit_category(&self, category: &str) -> Result<&Self> {
        self.base.visit(&format!("index.php?rt=product/category&path={}", category))?;
        Ok(self)
    }

    /// Open the product at the given zero-based position in the listing
    ///
    /// An index past the end of the rendered list matches nothing, so the
    /// locate times out and the test fails; there is no silent no-op.
    pub fn select_product(&self, index: usize) -> Result<&Self> {
        let cell = format!("{}:nth-child({}) a.prdocutname", self.selectors.get("product_cells")?, index + 1);
        self.base.click(&cell)?;
        Ok(self)
    }

    /// Open the first product in the listing
    pub fn select_first_product(&self) -> Result<&Self> {
        self.select_product(0)
    }

    /// Set the order quantity on a product page
    pub fn set_quantity(&self, quantity: u32) -> Result<&Self> {
        self.base.type_text(self.selectors.get("quantity")?, &quantity.to_string())?;
        Ok(self)
    }

    /// Add the open product to the cart
    pub fn add_to_cart(&self) -> Result<&Self> {
        self.base.click(self.selectors.get("add_to_cart")?)?;
        Ok(self)
    }

    /// Assert the category's product list is rendered
    pub fn product_list_should_be_visible(&self) -> Result<&Self> {
        self.base.assert_visible(self.selectors.get("product_list")?)?;
        Ok(self)
    }

    /// Assert a product detail page is showing its title
    pub fn product_title_should_be_visible(&self) -> Result<&Self> {
        self.base.assert_visible(self.selectors.get("product_title")?)?;
        Ok(self)
    }

    /// Assert the cart content panel is rendered
    pub fn cart_panel_should_be_visible(&self) -> Result<&Self> {
        self.base.assert_visible(self.selectors.get("cart_panel")?)?;
        Ok(self)
    }

    /// Assert the quantity shown in the cart equals the expected amount
    pub fn cart_quantity_should_equal(&self, quantity: u32) -> Result<&Self> {
        self.base.session().assert_value_equals(self.selectors.get("cart_quantity")?, &quantity.to_string())?;
        Ok(self)
    }

    pub fn url_should_contain(&self, fragment: &str) -> Result<&Self> {
        self.base.url_should_contain(fragment)?;
        Ok(self)
    }
}
