mod sitemap;
