use serde::{Deserialize, Serialize};

use crate::models::Product;

/// The product fields a cart line keeps for display.
/// Captured when the line is added so the cart renders without refetching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineSnapshot {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Unit price in euro cents at the time the line was added
    pub price_cents: u32,
}

/// One chosen variant of a product plus a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub slug: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub product: LineSnapshot,
}

impl CartLine {
    /// Build a line for `quantity` units of `product` in the given variant.
    pub fn new(
        product: &Product,
        size: impl Into<String>,
        color: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            slug: product.slug.clone(),
            size: size.into(),
            color: color.into(),
            quantity,
            product: LineSnapshot {
                title: product.title.clone(),
                image: product.first_image().map(str::to_string),
                price_cents: product.price_cents,
            },
        }
    }

    /// `price_cents * quantity`, widened so large carts cannot overflow.
    pub fn line_total_cents(&self) -> u64 {
        u64::from(self.product.price_cents) * u64::from(self.quantity)
    }
}

/// Ordered list of cart lines. Serializes as a bare JSON array.
///
/// Lines are append-only and position-addressed: adding the same variant
/// twice yields two lines, and edits target an index, never a key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Append a line at the end. Never merges with an existing line.
    pub fn add(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Set the quantity of the line at `index`, clamped to at least 1.
    /// Out-of-range indices are ignored.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = quantity.max(1);
        }
    }

    /// Remove the line at `index`, keeping the order of the rest.
    /// Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Sum of `price_cents * quantity` over all lines.
    pub fn subtotal_cents(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total_cents).sum()
    }

    /// Number of lines (not total quantity).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Project the cart into the checkout wire format, preserving order.
    pub fn checkout_items(&self) -> Vec<CheckoutItem> {
        self.lines.iter().map(CheckoutItem::from).collect()
    }
}

/// Wire format for one line of a checkout request.
/// Field order matches what the payment backend expects.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckoutItem {
    pub slug: String,
    pub quantity: u32,
    pub size: String,
    pub color: String,
}

impl From<&CartLine> for CheckoutItem {
    fn from(line: &CartLine) -> Self {
        Self {
            slug: line.slug.clone(),
            quantity: line.quantity,
            size: line.size.clone(),
            color: line.color.clone(),
        }
    }
}

/// Parse a quantity input field value. Anything that is not a positive
/// integer falls back to 1.
pub fn parse_quantity(input: &str) -> u32 {
    input.trim().parse::<u32>().map_or(1, |q| q.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee(slug: &str, price_cents: u32) -> Product {
        serde_json::from_value(serde_json::json!({
            "slug": slug,
            "title": format!("Tee {slug}"),
            "price_cents": price_cents,
            "images": [format!("/img/{slug}.jpg")],
            "sizes": ["S", "M", "L", "XL"],
            "colors": ["Forest Green", "Sand", "Sky"],
        }))
        .unwrap()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&tee("duck-tee-1", 2450), "M", "Forest Green", 2));
        cart.add(CartLine::new(&tee("duck-tee-2", 1990), "L", "Sand", 1));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].slug, "duck-tee-1");
        assert_eq!(cart.lines()[1].slug, "duck-tee-2");
        assert_eq!(cart.subtotal_cents(), 2 * 2450 + 1990);
    }

    #[test]
    fn test_same_variant_twice_stays_two_lines() {
        let product = tee("duck-tee-1", 2450);
        let mut cart = Cart::default();
        cart.add(CartLine::new(&product, "M", "Forest Green", 1));
        cart.add(CartLine::new(&product, "M", "Forest Green", 1));

        // Duplicate variants are never merged
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal_cents(), 2 * 2450);
    }

    #[test]
    fn test_line_snapshot_captures_display_fields() {
        let line = CartLine::new(&tee("duck-tee-1", 2450), "S", "Sky", 3);

        assert_eq!(line.product.title, "Tee duck-tee-1");
        assert_eq!(line.product.image.as_deref(), Some("/img/duck-tee-1.jpg"));
        assert_eq!(line.product.price_cents, 2450);
        assert_eq!(line.line_total_cents(), 3 * 2450);
    }

    #[test]
    fn test_set_quantity_touches_only_target_line() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&tee("duck-tee-1", 2450), "M", "Forest Green", 2));
        cart.add(CartLine::new(&tee("duck-tee-2", 1990), "L", "Sand", 1));

        cart.set_quantity(1, 5);

        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 5);
        assert_eq!(cart.subtotal_cents(), 2 * 2450 + 5 * 1990);
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&tee("duck-tee-1", 2450), "M", "Forest Green", 2));

        cart.set_quantity(0, 0);

        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_out_of_range_is_ignored() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&tee("duck-tee-1", 2450), "M", "Forest Green", 2));

        cart.set_quantity(7, 5);

        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&tee("duck-tee-1", 2450), "M", "Forest Green", 1));
        cart.add(CartLine::new(&tee("duck-tee-2", 1990), "L", "Sand", 1));
        cart.add(CartLine::new(&tee("duck-tee-3", 2200), "S", "Sky", 1));

        cart.remove(1);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].slug, "duck-tee-1");
        assert_eq!(cart.lines()[1].slug, "duck-tee-3");
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&tee("duck-tee-1", 2450), "M", "Forest Green", 1));

        cart.remove(3);

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::default();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.subtotal_cents(), 0);
        assert!(cart.checkout_items().is_empty());
    }

    #[test]
    fn test_checkout_items_projection() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&tee("duck-tee-1", 2450), "M", "Forest Green", 2));
        cart.add(CartLine::new(&tee("duck-tee-2", 1990), "XL", "Sand", 1));

        let items = cart.checkout_items();

        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            CheckoutItem {
                slug: "duck-tee-1".to_string(),
                quantity: 2,
                size: "M".to_string(),
                color: "Forest Green".to_string(),
            }
        );
        assert_eq!(items[1].slug, "duck-tee-2");
    }

    #[test]
    fn test_checkout_item_wire_shape() {
        let item = CheckoutItem::from(&CartLine::new(
            &tee("duck-tee-1", 2450),
            "M",
            "Forest Green",
            2,
        ));

        // The payment backend sees only variant and quantity, no prices
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({
                "slug": "duck-tee-1",
                "quantity": 2,
                "size": "M",
                "color": "Forest Green",
            })
        );
    }

    #[test]
    fn test_cart_serializes_as_bare_array() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&tee("duck-tee-1", 2450), "M", "Forest Green", 1));

        let json = serde_json::to_value(&cart).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["slug"], "duck-tee-1");
        assert_eq!(json[0]["product"]["price_cents"], 2450);
    }

    #[test]
    fn test_cart_line_tolerates_missing_image() {
        let cart: Cart = serde_json::from_value(serde_json::json!([{
            "slug": "duck-tee-1",
            "size": "M",
            "color": "Forest Green",
            "quantity": 1,
            "product": { "title": "Pond Life", "price_cents": 2450 },
        }]))
        .unwrap();

        assert_eq!(cart.len(), 1);
        assert!(cart.lines()[0].product.image.is_none());
    }

    #[test]
    fn test_line_total_is_exact_for_large_quantities() {
        let line = CartLine::new(&tee("duck-tee-1", u32::MAX), "M", "Forest Green", 1_000);

        assert_eq!(line.line_total_cents(), u64::from(u32::MAX) * 1_000);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 7 "), 7);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-2"), 1);
        assert_eq!(parse_quantity("2.5"), 1);
        assert_eq!(parse_quantity("abc"), 1);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn tee(slug: &str, price_cents: u32) -> Product {
        serde_json::from_value(serde_json::json!({
            "slug": slug,
            "title": format!("Tee {slug}"),
            "price_cents": price_cents,
        }))
        .unwrap()
    }

    proptest! {
        #[test]
        fn test_adds_preserve_length_and_order(
            additions in proptest::collection::vec(("[a-z]{3,10}", 1u32..50, 1u32..100_000), 0..12)
        ) {
            let mut cart = Cart::default();
            for (slug, quantity, price) in &additions {
                cart.add(CartLine::new(&tee(slug, *price), "M", "Forest Green", *quantity));
            }

            prop_assert_eq!(cart.len(), additions.len());
            for (line, (slug, ..)) in cart.lines().iter().zip(&additions) {
                prop_assert_eq!(&line.slug, slug);
            }
        }

        #[test]
        fn test_subtotal_matches_manual_sum(
            additions in proptest::collection::vec((1u32..50, 1u32..100_000), 0..12)
        ) {
            let mut cart = Cart::default();
            let mut expected = 0u64;
            for (quantity, price) in &additions {
                cart.add(CartLine::new(&tee("duck", *price), "M", "Forest Green", *quantity));
                expected += u64::from(*quantity) * u64::from(*price);
            }

            prop_assert_eq!(cart.subtotal_cents(), expected);
        }

        #[test]
        fn test_quantity_edit_leaves_other_lines_alone(
            quantities in proptest::collection::vec(1u32..50, 1..10),
            target in 0usize..10,
            new_quantity in 0u32..50
        ) {
            let target = target % quantities.len();
            let mut cart = Cart::default();
            for quantity in &quantities {
                cart.add(CartLine::new(&tee("duck", 2450), "M", "Forest Green", *quantity));
            }

            cart.set_quantity(target, new_quantity);

            for (index, line) in cart.lines().iter().enumerate() {
                if index == target {
                    prop_assert_eq!(line.quantity, new_quantity.max(1));
                } else {
                    prop_assert_eq!(line.quantity, quantities[index]);
                }
            }
        }

        #[test]
        fn test_remove_keeps_relative_order(
            count in 1usize..10,
            target in 0usize..10
        ) {
            let target = target % count;
            let mut cart = Cart::default();
            for index in 0..count {
                cart.add(CartLine::new(
                    &tee(&format!("duck-{index}"), 2450),
                    "M",
                    "Forest Green",
                    1,
                ));
            }

            cart.remove(target);

            let expected: Vec<String> = (0..count)
                .filter(|index| *index != target)
                .map(|index| format!("duck-{index}"))
                .collect();
            let actual: Vec<String> =
                cart.lines().iter().map(|line| line.slug.clone()).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn test_persisted_cart_round_trips(
            additions in proptest::collection::vec(("[a-z]{3,10}", 1u32..50, 1u32..100_000), 0..12)
        ) {
            let mut cart = Cart::default();
            for (slug, quantity, price) in &additions {
                cart.add(CartLine::new(&tee(slug, *price), "M", "Forest Green", *quantity));
            }

            let json = serde_json::to_string(&cart).unwrap();
            let restored: Cart = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(restored, cart);
        }
    }
}
