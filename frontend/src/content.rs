//! Static copy for the home, about and FAQ pages.

/// A titled paragraph: home features, about sections and FAQ entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub title: &'static str,
    pub body: &'static str,
}

const fn entry(title: &'static str, body: &'static str) -> Entry {
    Entry { title, body }
}

pub const HERO_TITLE: &str = "Your PDF Toolkit";
pub const HERO_SUBTITLE: &str =
    "Merge, split, compress, convert, and edit PDFs for free. Fast, secure, and easy to use.";

/// "Why Choose Our PDF Tools?" on the home page.
pub const FEATURES: [Entry; 3] = [
    entry("Secure Processing", "All files are processed securely and deleted after 1 hour."),
    entry("Easy to Use", "Simple interface with drag-and-drop functionality."),
    entry("Free to Use", "All basic PDF tools are completely free to use."),
];

pub const ABOUT_INTRO: &str = "PDF Tools is a comprehensive online platform that provides a suite of tools for working with PDF documents. Our mission is to make PDF editing accessible, secure, and easy for everyone.";

pub const ABOUT_SECTIONS: [Entry; 4] = [
    entry(
        "Secure Processing",
        "All files are processed securely on our servers and automatically deleted after 1 hour. We never access the content of your files or share them with third parties.",
    ),
    entry(
        "Fast and Reliable",
        "Our tools are designed to process your files quickly and efficiently. We use the latest technologies to ensure high-quality results every time.",
    ),
    entry(
        "Comprehensive Tools",
        "From merging and splitting to compressing and converting, we offer a complete set of tools for all your PDF needs. Our intuitive interface makes it easy to get the job done.",
    ),
    entry(
        "Time-Saving",
        "No need to install software or learn complex applications. Our web-based tools are available 24/7 and can be accessed from any device with an internet connection.",
    ),
];

pub const FAQ: [Entry; 10] = [
    entry(
        "Is PDF Tools free to use?",
        "Yes, all basic PDF tools are completely free to use. We may offer premium features in the future, but our core tools will always remain free.",
    ),
    entry(
        "How secure are my files?",
        "Your files are processed securely on our servers and automatically deleted after 1 hour. We use HTTPS encryption to ensure that your files are transferred securely. We never access the content of your files or share them with third parties.",
    ),
    entry(
        "What is the maximum file size?",
        "The maximum file size for free users is 100MB per file. This limit may be increased for premium users in the future.",
    ),
    entry(
        "Can I use PDF Tools on my mobile device?",
        "Yes, PDF Tools is fully responsive and works on all devices, including smartphones and tablets. Our interface is designed to be user-friendly on all screen sizes.",
    ),
    entry(
        "How long are my files stored?",
        "All uploaded files are automatically deleted from our servers after 1 hour. We recommend downloading your processed files immediately after they are ready.",
    ),
    entry(
        "Do I need to create an account?",
        "No, you don't need to create an account to use our basic tools. Simply upload your files and start processing them right away.",
    ),
    entry(
        "What file formats are supported?",
        "Our tools primarily work with PDF files. For conversion tools, we support various formats including Word documents (.doc, .docx), Excel spreadsheets (.xls, .xlsx), PowerPoint presentations (.ppt, .pptx), images (.jpg, .png, .gif, etc.), and text files (.txt).",
    ),
    entry(
        "Can I process multiple files at once?",
        "Yes, many of our tools support batch processing. For example, you can merge multiple PDFs, convert multiple files to PDF, or compress multiple PDFs at once.",
    ),
    entry(
        "How do I report a bug or suggest a feature?",
        "You can contact us through our Contact page or send an email to support@pdftools.example.com. We appreciate your feedback and are constantly working to improve our tools.",
    ),
    entry(
        "Is there a desktop version of PDF Tools?",
        "Currently, PDF Tools is only available as a web application. However, we are considering developing desktop and mobile apps in the future. Stay tuned for updates!",
    ),
];

/// The first FAQ entries, repeated at the bottom of the about page.
pub fn about_faq() -> &'static [Entry] {
    &FAQ[..4]
}
