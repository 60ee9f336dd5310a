//! Reference item names used to populate purchase and sale selection inputs.

const INVENTORY_ITEMS: &[&str] = &[
    "Arabica Coffee Beans",
    "Robusta Coffee Beans",
    "Colombian Coffee Beans",
    "Ethiopian Coffee Beans",
    "Milk",
    "Sugar",
    "Cups (Small)",
    "Cups (Medium)",
    "Cups (Large)",
    "Lids",
    "Napkins",
    "Stirrers",
    "Cocoa Powder",
    "Vanilla Syrup",
    "Caramel Syrup",
    "Hazelnut Syrup",
    "Whipped Cream",
    "Chocolate Syrup",
    "Tea Bags (Assorted)",
    "Honey",
];

const MENU_ITEMS: &[&str] = &[
    "Espresso",
    "Americano",
    "Cappuccino",
    "Latte",
    "Mocha",
    "Flat White",
    "Cold Brew",
    "Iced Coffee",
    "Macchiato",
    "Affogato",
    "Chai Latte",
    "Hot Chocolate",
    "Caramel Frappuccino",
    "Vanilla Frappuccino",
    "Green Tea",
    "Black Tea",
    "Herbal Tea",
    "Croissant",
    "Blueberry Muffin",
    "Chocolate Chip Cookie",
];

/// Supplies bought for the cafe.
pub fn inventory_items() -> &'static [&'static str] {
    INVENTORY_ITEMS
}

/// Items sold to customers.
pub fn menu_items() -> &'static [&'static str] {
    MENU_ITEMS
}
